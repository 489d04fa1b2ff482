//! Tokenizer, scheme check and component extraction.

use crate::constants::{
    COMPONENT_SEPARATOR, DEV_LITERAL, MIN_SECTION_COUNT, SECTION_SEPARATOR, URN_LITERAL,
};
use crate::error::ParseErrorKind;
use crate::grammar::Grammar;

/// The `:`-separated sections of a urn:dev string, borrowed from the input.
///
/// The scheme literals have been checked, the component part has been split
/// off the last section, and every remaining body section is a valid
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Sections<'a> {
    count: usize,
    subtype: &'a str,
    head: &'a str,
    tail: Vec<&'a str>,
    component: Vec<&'a str>,
}

impl<'a> Sections<'a> {
    /// Splits and checks `input`. Section counts outside
    /// `MIN_SECTION_COUNT..max_sections` are rejected.
    pub(crate) fn split(input: &'a str, max_sections: usize) -> Result<Self, ParseErrorKind> {
        let mut sections: Vec<&'a str> = input.split(SECTION_SEPARATOR).collect();
        let count = sections.len();

        if count < MIN_SECTION_COUNT || count >= max_sections {
            return Err(ParseErrorKind::MalformedUrn {
                sections: count,
                min: MIN_SECTION_COUNT,
                max: max_sections,
            });
        }

        if !sections[0].eq_ignore_ascii_case(URN_LITERAL) {
            return Err(ParseErrorKind::MissingUrnLiteral {
                found: sections[0].to_string(),
            });
        }

        if !sections[1].eq_ignore_ascii_case(DEV_LITERAL) {
            return Err(ParseErrorKind::MissingDevLiteral {
                found: sections[1].to_string(),
            });
        }

        let component = Self::extract_components(&mut sections)?;

        let mut body = sections.split_off(3).into_iter();
        let subtype = sections[2];
        let head = body.next().unwrap_or_default();
        let tail: Vec<&'a str> = body.collect();

        for (index, token) in std::iter::once(head).chain(tail.iter().copied()).enumerate() {
            Grammar::Identifier
                .validate(token)
                .map_err(|reason| ParseErrorKind::InvalidIdentifier {
                    token: token.to_string(),
                    index,
                    reason,
                })?;
        }

        Ok(Self {
            count,
            subtype,
            head,
            tail,
            component,
        })
    }

    /// Strips `_component` suffixes off the last section and validates them.
    fn extract_components(sections: &mut [&'a str]) -> Result<Vec<&'a str>, ParseErrorKind> {
        let Some(last) = sections.last_mut() else {
            return Ok(Vec::new());
        };

        let original: &'a str = *last;
        let mut pieces = original.split(COMPONENT_SEPARATOR);
        let stripped = pieces.next().unwrap_or_default();
        let component: Vec<&'a str> = pieces.collect();

        for (index, token) in component.iter().enumerate() {
            Grammar::Identifier
                .validate(token)
                .map_err(|reason| ParseErrorKind::InvalidComponent {
                    token: (*token).to_string(),
                    index,
                    reason,
                })?;
        }

        *last = stripped;
        Ok(component)
    }

    /// Total number of `:`-separated sections in the input.
    pub(crate) const fn count(&self) -> usize {
        self.count
    }

    /// The subtype section, unvalidated.
    pub(crate) const fn subtype(&self) -> &'a str {
        self.subtype
    }

    /// The first body section, with any component part removed.
    pub(crate) const fn head(&self) -> &'a str {
        self.head
    }

    /// Body sections after the first.
    pub(crate) fn tail(&self) -> &[&'a str] {
        &self.tail
    }

    pub(crate) fn component(&self) -> &[&'a str] {
        &self.component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_SECTION_COUNT;
    use crate::error::TokenError;

    fn split(input: &str) -> Result<Sections<'_>, ParseErrorKind> {
        Sections::split(input, MAX_SECTION_COUNT)
    }

    #[test]
    fn splits_body_and_subtype() {
        let sections = split("urn:dev:org:32473-foo:bar:zoo").unwrap();
        assert_eq!(sections.count(), 6);
        assert_eq!(sections.subtype(), "org");
        assert_eq!(sections.head(), "32473-foo");
        assert_eq!(sections.tail(), &["bar", "zoo"]);
        assert!(sections.component().is_empty());
    }

    #[test]
    fn scheme_literals_are_case_insensitive() {
        let sections = split("URN:Dev:mac:0024beffff804ff1").unwrap();
        assert_eq!(sections.subtype(), "mac");
    }

    #[test]
    fn too_few_sections() {
        assert_eq!(
            split("urn:dev:"),
            Err(ParseErrorKind::MalformedUrn {
                sections: 3,
                min: 4,
                max: 16
            })
        );
    }

    #[test]
    fn section_ceiling_is_exclusive() {
        let at_limit = format!("urn:dev:example{}", ":a".repeat(13));
        assert!(matches!(
            split(&at_limit),
            Err(ParseErrorKind::MalformedUrn { sections: 16, .. })
        ));

        let below_limit = format!("urn:dev:example{}", ":a".repeat(12));
        assert!(split(&below_limit).is_ok());
    }

    #[test]
    fn missing_urn_literal() {
        assert_eq!(
            split("foo:dev:mac:0024beffff804ff1"),
            Err(ParseErrorKind::MissingUrnLiteral {
                found: "foo".to_string()
            })
        );
    }

    #[test]
    fn missing_dev_literal() {
        assert_eq!(
            split("urn:foo:mac:0024beffff804ff1"),
            Err(ParseErrorKind::MissingDevLiteral {
                found: "foo".to_string()
            })
        );
    }

    #[test]
    fn components_come_from_last_section_only() {
        let sections = split("urn:dev:os:32473-123456:identifier_first_second").unwrap();
        assert_eq!(sections.head(), "32473-123456");
        assert_eq!(sections.tail(), &["identifier"]);
        assert_eq!(sections.component(), &["first", "second"]);
    }

    #[test]
    fn underscore_in_earlier_section_is_an_invalid_identifier() {
        assert_eq!(
            split("urn:dev:example:a_b:c"),
            Err(ParseErrorKind::InvalidIdentifier {
                token: "a_b".to_string(),
                index: 0,
                reason: TokenError::InvalidChar { char: '_', position: 1 },
            })
        );
    }

    #[test]
    fn invalid_component() {
        assert_eq!(
            split("urn:dev:mac:0024beffff804ff1_fa%il"),
            Err(ParseErrorKind::InvalidComponent {
                token: "fa%il".to_string(),
                index: 0,
                reason: TokenError::InvalidChar { char: '%', position: 2 },
            })
        );
    }

    #[test]
    fn empty_component_is_invalid() {
        assert!(matches!(
            split("urn:dev:example:foo_"),
            Err(ParseErrorKind::InvalidComponent {
                reason: TokenError::Empty,
                ..
            })
        ));
    }

    #[test]
    fn components_are_checked_before_identifiers() {
        assert!(matches!(
            split("urn:dev:example:fa%il_b%d"),
            Err(ParseErrorKind::InvalidComponent { .. })
        ));
    }

    #[test]
    fn empty_body_is_an_invalid_identifier() {
        assert_eq!(
            split("urn:dev:mac:"),
            Err(ParseErrorKind::InvalidIdentifier {
                token: String::new(),
                index: 0,
                reason: TokenError::Empty,
            })
        );
    }
}
