//! The urn:dev parsing pipeline.

use crate::body::DeviceBody;
use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::sections::Sections;
use crate::subtype::Subtype;
use crate::urn_dev::UrnDev;

/// A urn:dev parser with configurable limits.
///
/// Parsing is a linear pipeline: tokenize on `:`, check the `urn` and `dev`
/// literals, strip the component part, validate identifiers, then apply the
/// body grammar of the subtype. The first failing stage ends the parse and no
/// record is produced.
///
/// # Examples
///
/// ```
/// use urn_dev::{ParseErrorKind, ParserConfig, UrnDevParser};
///
/// let parser = UrnDevParser::new(ParserConfig::new().with_max_length(32));
///
/// let urn = parser.parse("urn:dev:mac:0024beffff804ff1").unwrap();
/// assert_eq!(urn.eui64_identifier(), "0024beffff804ff1");
///
/// let err = parser.parse("urn:dev:ops:32473-Refrigerator-5002:identifier").unwrap_err();
/// assert!(matches!(err.kind, ParseErrorKind::TooLong { max: 32, .. }));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrnDevParser {
    config: ParserConfig,
}

impl UrnDevParser {
    /// Creates a parser with the given configuration.
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the parser configuration.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses a urn:dev identifier.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is not a well-formed urn:dev
    /// identifier or exceeds the configured limits.
    pub fn parse(&self, input: &str) -> Result<UrnDev, ParseError> {
        let result = self.parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        });

        #[cfg(feature = "tracing")]
        match &result {
            Ok(urn) => tracing::trace!(input, subtype = urn.subtype(), "parsed urn:dev"),
            Err(err) => tracing::debug!(input, error = %err.kind, "rejected urn:dev"),
        }

        result
    }

    fn parse_inner(&self, input: &str) -> Result<UrnDev, ParseErrorKind> {
        if let Some(max) = self.config.max_length {
            if input.len() > max {
                return Err(ParseErrorKind::TooLong {
                    max,
                    actual: input.len(),
                });
            }
        }

        let sections = Sections::split(input, self.config.max_sections)?;

        let subtype = sections
            .subtype()
            .parse::<Subtype>()
            .map_err(|reason| ParseErrorKind::InvalidSubtype {
                token: sections.subtype().to_string(),
                reason,
            })?;

        let (body, identifier) = DeviceBody::parse(subtype, &sections)?;

        Ok(UrnDev::from_parts(
            input,
            body,
            &identifier,
            sections.component(),
        ))
    }
}
