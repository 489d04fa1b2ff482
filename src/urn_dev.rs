//! Main urn:dev type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::body::DeviceBody;
use crate::constants::URN_DEV_PREFIX;
use crate::error::ParseError;
use crate::parser::UrnDevParser;

/// Returns true if `input` starts with `urn:dev:`, ignoring case.
///
/// This is a cheap pre-filter: a string with the prefix can still fail
/// [`UrnDev::parse`].
///
/// # Examples
///
/// ```
/// use urn_dev::has_urn_dev_prefix;
///
/// assert!(has_urn_dev_prefix("urn:dev:ops:32473-Refrigerator-5002"));
/// assert!(has_urn_dev_prefix("URN:DEV:mac:0024beffff804ff1"));
/// assert!(!has_urn_dev_prefix("urn:not-dev:value"));
/// ```
#[must_use]
pub fn has_urn_dev_prefix(input: &str) -> bool {
    input
        .as_bytes()
        .get(..URN_DEV_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(URN_DEV_PREFIX.as_bytes()))
}

/// A parsed and validated RFC 9039 device identifier.
///
/// # Structure
///
/// ```text
/// urn:dev:<subtype>:<body>[:<identifier>...][_<component>...]
/// ```
///
/// The subtype-specific fields live in a [`DeviceBody`]. The flat accessors
/// (`organization`, `serial`, `eui64_identifier`, ...) return an empty string
/// when the field does not apply to the subtype.
///
/// # Examples
///
/// ```
/// use urn_dev::UrnDev;
///
/// let urn = UrnDev::parse("urn:dev:ops:32473-Refrigerator-5002").unwrap();
/// assert_eq!(urn.subtype(), "ops");
/// assert_eq!(urn.organization(), "32473");
/// assert_eq!(urn.product(), "Refrigerator");
/// assert_eq!(urn.serial(), "5002");
///
/// // Components and extra identifiers
/// let urn = UrnDev::parse("urn:dev:org:32473-foo_component").unwrap();
/// assert_eq!(urn.identifier(), ["foo"]);
/// assert_eq!(urn.component(), ["component"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrnDev {
    full_name: String,
    body: DeviceBody,
    component: Vec<String>,
    identifier: Vec<String>,
}

impl UrnDev {
    /// Parses a urn:dev identifier with the default limits.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input has fewer than 4 or at least 16 `:`-separated sections
    /// - The input does not start with `urn:dev:` (case-insensitive)
    /// - A component or identifier contains characters outside
    ///   letters, digits, `.` and `-`
    /// - The body does not match the grammar of its subtype
    /// - An unknown subtype is not a lowercase letter followed by lowercase
    ///   letters or digits
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        UrnDevParser::default().parse(input)
    }

    pub(crate) fn from_parts(
        full_name: &str,
        body: DeviceBody,
        identifier: &[&str],
        component: &[&str],
    ) -> Self {
        Self {
            full_name: full_name.to_string(),
            body,
            component: component.iter().map(|s| (*s).to_string()).collect(),
            identifier: identifier.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Returns the original input, unchanged.
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Returns the subtype (`mac`, `ow`, `org`, `os`, `ops` or an extension).
    #[must_use]
    pub fn subtype(&self) -> &str {
        self.body.subtype()
    }

    /// Returns the subtype-specific fields.
    #[must_use]
    pub const fn body(&self) -> &DeviceBody {
        &self.body
    }

    /// Returns the organization number, or `""` unless the subtype is
    /// `org`, `os` or `ops`.
    #[must_use]
    pub fn organization(&self) -> &str {
        self.body.organization().unwrap_or_default()
    }

    /// Returns the product, or `""` unless the subtype is `ops`.
    #[must_use]
    pub fn product(&self) -> &str {
        self.body.product().unwrap_or_default()
    }

    /// Returns the serial, or `""` unless the subtype is `os` or `ops`.
    #[must_use]
    pub fn serial(&self) -> &str {
        self.body.serial().unwrap_or_default()
    }

    /// Returns the components, in order. Empty when there is no `_` part.
    #[must_use]
    pub fn component(&self) -> &[String] {
        &self.component
    }

    /// Returns the identifiers left after the subtype fields, in order.
    #[must_use]
    pub fn identifier(&self) -> &[String] {
        &self.identifier
    }

    /// Returns the EUI-64 address, or `""` unless the subtype is `mac`.
    #[must_use]
    pub fn eui64_identifier(&self) -> &str {
        self.body.eui64().unwrap_or_default()
    }

    /// Returns the 1-Wire address, or `""` unless the subtype is `ow`.
    #[must_use]
    pub fn ow_identifier(&self) -> &str {
        self.body.ow_address().unwrap_or_default()
    }

    /// Returns the original input as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.full_name
    }
}

impl fmt::Display for UrnDev {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name)
    }
}

impl FromStr for UrnDev {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for UrnDev {
    fn as_ref(&self) -> &str {
        &self.full_name
    }
}

impl TryFrom<&str> for UrnDev {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for UrnDev {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UrnDev {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_name.cmp(&other.full_name)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for UrnDev {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.full_name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for UrnDev {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseErrorKind;

    #[test]
    fn prefix_check_ignores_case() {
        assert!(has_urn_dev_prefix("urn:dev:mac:0024beffff804ff1"));
        assert!(has_urn_dev_prefix("URN:DEV:mac:0024beffff804ff1"));
        assert!(has_urn_dev_prefix("Urn:Dev:"));
        assert!(!has_urn_dev_prefix("urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6"));
        assert!(!has_urn_dev_prefix("urn:dev"));
        assert!(!has_urn_dev_prefix(""));
    }

    #[test]
    fn prefix_check_is_independent_of_parse() {
        assert!(has_urn_dev_prefix("urn:dev:"));
        assert!(UrnDev::parse("urn:dev:").is_err());
    }

    #[test]
    fn prefix_check_handles_multibyte_input() {
        assert!(!has_urn_dev_prefix("urn:d\u{e9}v:mac"));
        assert!(!has_urn_dev_prefix("\u{1f600}\u{1f600}"));
    }

    #[test]
    fn parse_mac() {
        let urn = UrnDev::parse("urn:dev:mac:0024beffff804ff1").unwrap();
        assert_eq!(urn.full_name(), "urn:dev:mac:0024beffff804ff1");
        assert_eq!(urn.subtype(), "mac");
        assert_eq!(urn.organization(), "");
        assert_eq!(urn.product(), "");
        assert_eq!(urn.serial(), "");
        assert!(urn.component().is_empty());
        assert!(urn.identifier().is_empty());
        assert_eq!(urn.eui64_identifier(), "0024beffff804ff1");
        assert_eq!(urn.ow_identifier(), "");
        assert!(matches!(urn.body(), DeviceBody::Mac { .. }));
    }

    #[test]
    fn full_name_keeps_scheme_casing() {
        let urn = UrnDev::parse("URN:Dev:ow:10e2073a01080063").unwrap();
        assert_eq!(urn.full_name(), "URN:Dev:ow:10e2073a01080063");
        assert_eq!(urn.ow_identifier(), "10e2073a01080063");
    }

    #[test]
    fn parse_failure_carries_input() {
        let err = UrnDev::parse("urn:foo:mac:0024beffff804ff1").unwrap_err();
        assert_eq!(err.input, "urn:foo:mac:0024beffff804ff1");
        assert!(matches!(err.kind, ParseErrorKind::MissingDevLiteral { .. }));
    }

    #[test]
    fn display_roundtrip() {
        let input = "urn:dev:os:32473-12-34-56:identifier_component";
        let urn = UrnDev::parse(input).unwrap();
        assert_eq!(urn.to_string(), input);
        assert_eq!(urn.as_str(), input);
        assert_eq!(input.parse::<UrnDev>().unwrap(), urn);
        assert_eq!(UrnDev::try_from(input).unwrap(), urn);
    }

    #[test]
    fn ordering_follows_full_name() {
        let a = UrnDev::parse("urn:dev:mac:0024beffff804ff1").unwrap();
        let b = UrnDev::parse("urn:dev:ow:10e2073a01080063").unwrap();
        assert!(a < b);
    }
}
