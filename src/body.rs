//! Per-subtype body grammars.
//!
//! ```text
//! macbody   = %s"mac:" hexstring
//! owbody    = %s"ow:" hexstring
//! orgbody   = %s"org:" posnumber "-" identifier *( ":" identifier )
//! osbody    = %s"os:" posnumber "-" serial *( ":" identifier )
//! opsbody   = %s"ops:" posnumber "-" product "-" serial *( ":" identifier )
//! otherbody = subtype ":" identifier *( ":" identifier )
//! ```

use crate::constants::{
    BARE_TRAILING_SECTION_COUNT, BODY_SEPARATOR, EUI64_HEX_LENGTH, OW_ADDRESS_HEX_LENGTH,
};
use crate::error::{ParseErrorKind, TokenError};
use crate::grammar::{Grammar, validate_hex_address};
use crate::sections::Sections;
use crate::subtype::{ExtensionSubtype, Subtype};

/// The subtype-specific part of a parsed urn:dev identifier.
///
/// Each variant carries only the fields its grammar defines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeviceBody {
    /// `urn:dev:mac:<eui64>`
    Mac {
        /// 16 lowercase hex characters
        eui64: String,
    },
    /// `urn:dev:ow:<address>`
    Ow {
        /// 16 lowercase hex characters
        address: String,
    },
    /// `urn:dev:org:<organization>-<identifier>`
    Org {
        /// Positive decimal organization number
        organization: String,
    },
    /// `urn:dev:os:<organization>-<serial>`
    Os {
        /// Positive decimal organization number
        organization: String,
        /// Serial number; may contain dashes
        serial: String,
    },
    /// `urn:dev:ops:<organization>-<product>-<serial>`
    Ops {
        /// Positive decimal organization number
        organization: String,
        /// Product name without dashes
        product: String,
        /// Serial number
        serial: String,
    },
    /// `urn:dev:<subtype>:<identifier>` for any other subtype
    Other(ExtensionSubtype),
}

impl DeviceBody {
    /// Applies the body grammar for `subtype` and returns the body together
    /// with the identifiers it leaves over.
    pub(crate) fn parse<'a>(
        subtype: Subtype,
        sections: &Sections<'a>,
    ) -> Result<(Self, Vec<&'a str>), ParseErrorKind> {
        match subtype {
            Subtype::Mac => {
                let eui64 = hex_address(sections, "mac", EUI64_HEX_LENGTH, |token, reason| {
                    ParseErrorKind::InvalidEui64 { token, reason }
                })?;
                Ok((Self::Mac { eui64 }, sections.tail().to_vec()))
            }
            Subtype::Ow => {
                let address =
                    hex_address(sections, "ow", OW_ADDRESS_HEX_LENGTH, |token, reason| {
                        ParseErrorKind::InvalidOwAddress { token, reason }
                    })?;
                Ok((Self::Ow { address }, sections.tail().to_vec()))
            }
            Subtype::Org => {
                let (organization, rest) = split_organization(sections.head(), "org")?;
                Grammar::Identifier.validate(rest).map_err(|reason| {
                    ParseErrorKind::InvalidIdentifier {
                        token: rest.to_string(),
                        index: 0,
                        reason,
                    }
                })?;

                // The identifier after the organization stays in slot 0.
                let mut identifier = Vec::with_capacity(1 + sections.tail().len());
                identifier.push(rest);
                identifier.extend_from_slice(sections.tail());

                Ok((
                    Self::Org {
                        organization: organization.to_string(),
                    },
                    identifier,
                ))
            }
            Subtype::Os => {
                let (organization, serial) = split_organization(sections.head(), "os")?;
                validate_serial(serial, "os")?;

                Ok((
                    Self::Os {
                        organization: organization.to_string(),
                        serial: serial.to_string(),
                    },
                    sections.tail().to_vec(),
                ))
            }
            Subtype::Ops => {
                let body = sections.head();
                let parts: Vec<&str> = body.split(BODY_SEPARATOR).collect();
                let [organization, product, serial] = parts[..] else {
                    return Err(ParseErrorKind::InvalidOpsShape {
                        body: body.to_string(),
                        parts: parts.len(),
                    });
                };

                validate_org_number(organization, "ops")?;
                Grammar::IdentifierNoDash
                    .validate(product)
                    .map_err(|reason| ParseErrorKind::InvalidProduct {
                        token: product.to_string(),
                        reason,
                    })?;
                validate_serial(serial, "ops")?;

                Ok((
                    Self::Ops {
                        organization: organization.to_string(),
                        product: product.to_string(),
                        serial: serial.to_string(),
                    },
                    sections.tail().to_vec(),
                ))
            }
            Subtype::Extension(name) => {
                let mut identifier = Vec::with_capacity(1 + sections.tail().len());
                identifier.push(sections.head());
                identifier.extend_from_slice(sections.tail());
                Ok((Self::Other(name), identifier))
            }
        }
    }

    /// Returns the subtype name.
    #[must_use]
    pub fn subtype(&self) -> &str {
        match self {
            Self::Mac { .. } => "mac",
            Self::Ow { .. } => "ow",
            Self::Org { .. } => "org",
            Self::Os { .. } => "os",
            Self::Ops { .. } => "ops",
            Self::Other(name) => name.as_str(),
        }
    }

    /// Returns the organization number for `org`, `os` and `ops`.
    #[must_use]
    pub fn organization(&self) -> Option<&str> {
        match self {
            Self::Org { organization }
            | Self::Os { organization, .. }
            | Self::Ops { organization, .. } => Some(organization),
            _ => None,
        }
    }

    /// Returns the product for `ops`.
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        match self {
            Self::Ops { product, .. } => Some(product),
            _ => None,
        }
    }

    /// Returns the serial for `os` and `ops`.
    #[must_use]
    pub fn serial(&self) -> Option<&str> {
        match self {
            Self::Os { serial, .. } | Self::Ops { serial, .. } => Some(serial),
            _ => None,
        }
    }

    /// Returns the EUI-64 address for `mac`.
    #[must_use]
    pub fn eui64(&self) -> Option<&str> {
        match self {
            Self::Mac { eui64 } => Some(eui64),
            _ => None,
        }
    }

    /// Returns the 1-Wire address for `ow`.
    #[must_use]
    pub fn ow_address(&self) -> Option<&str> {
        match self {
            Self::Ow { address } => Some(address),
            _ => None,
        }
    }
}

/// Checks the `mac`/`ow` shape rules and the address itself.
fn hex_address(
    sections: &Sections<'_>,
    subtype: &'static str,
    len: usize,
    invalid: fn(String, TokenError) -> ParseErrorKind,
) -> Result<String, ParseErrorKind> {
    // TODO: RFC 9039 allows `*( ":" identifier )` only on org/os/ops bodies;
    // decide whether any trailing identifier after a mac/ow address should be rejected.
    if sections.count() == BARE_TRAILING_SECTION_COUNT {
        let token = sections.tail().first().copied().unwrap_or_default();
        return Err(ParseErrorKind::UnexpectedTrailingIdentifier {
            subtype,
            token: token.to_string(),
        });
    }

    let address = sections.head();
    validate_hex_address(address, len).map_err(|reason| invalid(address.to_string(), reason))?;
    Ok(address.to_string())
}

/// Splits `<posnumber>-<rest>` on the first dash.
fn split_organization<'a>(
    body: &'a str,
    subtype: &'static str,
) -> Result<(&'a str, &'a str), ParseErrorKind> {
    let (organization, rest) = body.split_once(BODY_SEPARATOR).ok_or_else(|| {
        ParseErrorKind::MissingOrgSeparator {
            subtype,
            body: body.to_string(),
        }
    })?;
    validate_org_number(organization, subtype)?;
    Ok((organization, rest))
}

fn validate_org_number(token: &str, subtype: &'static str) -> Result<(), ParseErrorKind> {
    Grammar::PosNumber
        .validate(token)
        .map_err(|reason| ParseErrorKind::InvalidOrgNumber {
            subtype,
            token: token.to_string(),
            reason,
        })
}

fn validate_serial(token: &str, subtype: &'static str) -> Result<(), ParseErrorKind> {
    Grammar::Identifier
        .validate(token)
        .map_err(|reason| ParseErrorKind::InvalidSerial {
            subtype,
            token: token.to_string(),
            reason,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SECTION_COUNT;

    fn parse_body(input: &str) -> Result<(DeviceBody, Vec<String>), ParseErrorKind> {
        let sections = Sections::split(input, MAX_SECTION_COUNT)?;
        let subtype = sections.subtype().parse::<Subtype>().unwrap();
        let (body, identifier) = DeviceBody::parse(subtype, &sections)?;
        Ok((body, identifier.into_iter().map(String::from).collect()))
    }

    #[test]
    fn mac_consumes_first_identifier() {
        let (body, identifier) = parse_body("urn:dev:mac:0024beffff804ff1").unwrap();
        assert_eq!(body.eui64(), Some("0024beffff804ff1"));
        assert_eq!(body.ow_address(), None);
        assert!(identifier.is_empty());
    }

    #[test]
    fn mac_with_two_trailing_identifiers_is_accepted() {
        let (body, identifier) = parse_body("urn:dev:mac:0024beffff804ff1:a:b").unwrap();
        assert_eq!(body.eui64(), Some("0024beffff804ff1"));
        assert_eq!(identifier, vec!["a", "b"]);
    }

    #[test]
    fn mac_with_single_trailing_identifier_is_rejected() {
        assert_eq!(
            parse_body("urn:dev:mac:acde48234567019f:invalid"),
            Err(ParseErrorKind::UnexpectedTrailingIdentifier {
                subtype: "mac",
                token: "invalid".to_string(),
            })
        );
    }

    #[test]
    fn shape_rule_is_checked_before_address() {
        assert!(matches!(
            parse_body("urn:dev:ow:zz:invalid"),
            Err(ParseErrorKind::UnexpectedTrailingIdentifier { subtype: "ow", .. })
        ));
    }

    #[test]
    fn mac_rejects_wrong_length() {
        assert_eq!(
            parse_body("urn:dev:mac:acde48234567019fa"),
            Err(ParseErrorKind::InvalidEui64 {
                token: "acde48234567019fa".to_string(),
                reason: TokenError::WrongLength {
                    expected: 16,
                    actual: 17
                },
            })
        );
    }

    #[test]
    fn ow_rejects_non_hex() {
        assert!(matches!(
            parse_body("urn:dev:ow:10e20fail1080063"),
            Err(ParseErrorKind::InvalidOwAddress {
                reason: TokenError::InvalidChar { char: 'i', .. },
                ..
            })
        ));
    }

    #[test]
    fn org_substitutes_identifier() {
        let (body, identifier) = parse_body("urn:dev:org:32473-foo:bar:zoo").unwrap();
        assert_eq!(body.organization(), Some("32473"));
        assert_eq!(body.serial(), None);
        assert_eq!(identifier, vec!["foo", "bar", "zoo"]);
    }

    #[test]
    fn org_without_dash() {
        assert_eq!(
            parse_body("urn:dev:org:32473"),
            Err(ParseErrorKind::MissingOrgSeparator {
                subtype: "org",
                body: "32473".to_string(),
            })
        );
    }

    #[test]
    fn org_with_empty_identifier() {
        assert!(matches!(
            parse_body("urn:dev:org:32473-"),
            Err(ParseErrorKind::InvalidIdentifier {
                index: 0,
                reason: TokenError::Empty,
                ..
            })
        ));
    }

    #[test]
    fn os_keeps_dashes_in_serial() {
        let (body, identifier) = parse_body("urn:dev:os:32473-12-34-56:identifier").unwrap();
        assert_eq!(body.organization(), Some("32473"));
        assert_eq!(body.serial(), Some("12-34-56"));
        assert_eq!(identifier, vec!["identifier"]);
    }

    #[test]
    fn os_rejects_leading_zero() {
        assert!(matches!(
            parse_body("urn:dev:os:032473-12-34-56"),
            Err(ParseErrorKind::InvalidOrgNumber {
                subtype: "os",
                reason: TokenError::LeadingZero,
                ..
            })
        ));
    }

    #[test]
    fn os_with_empty_serial() {
        assert!(matches!(
            parse_body("urn:dev:os:32473-"),
            Err(ParseErrorKind::InvalidSerial {
                subtype: "os",
                reason: TokenError::Empty,
                ..
            })
        ));
    }

    #[test]
    fn ops_splits_three_parts() {
        let (body, identifier) = parse_body("urn:dev:ops:32473-Refrigerator-5002").unwrap();
        assert_eq!(body.organization(), Some("32473"));
        assert_eq!(body.product(), Some("Refrigerator"));
        assert_eq!(body.serial(), Some("5002"));
        assert!(identifier.is_empty());
    }

    #[test]
    fn ops_shape_errors() {
        assert_eq!(
            parse_body("urn:dev:ops:32473-Refrigerator"),
            Err(ParseErrorKind::InvalidOpsShape {
                body: "32473-Refrigerator".to_string(),
                parts: 2,
            })
        );
        assert!(matches!(
            parse_body("urn:dev:ops:32473-Fridge-50-02"),
            Err(ParseErrorKind::InvalidOpsShape { parts: 4, .. })
        ));
    }

    #[test]
    fn ops_rejects_empty_product_and_serial() {
        assert!(matches!(
            parse_body("urn:dev:ops:32473--5002"),
            Err(ParseErrorKind::InvalidProduct {
                reason: TokenError::Empty,
                ..
            })
        ));
        assert!(matches!(
            parse_body("urn:dev:ops:32473-Refrigerator-"),
            Err(ParseErrorKind::InvalidSerial {
                subtype: "ops",
                ..
            })
        ));
    }

    #[test]
    fn other_keeps_all_identifiers() {
        let (body, identifier) = parse_body("urn:dev:example:new-1-2-3:x").unwrap();
        assert_eq!(body.subtype(), "example");
        assert_eq!(body.organization(), None);
        assert_eq!(identifier, vec!["new-1-2-3", "x"]);
    }
}
