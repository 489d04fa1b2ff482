//! Configuration for the urn:dev parser.

use crate::constants::MAX_SECTION_COUNT;

/// Limits applied by [`UrnDevParser`](crate::UrnDevParser) before any grammar
/// is checked.
///
/// The defaults match the behavior of [`parse`](crate::parse).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Inputs with this many `:`-separated sections or more are rejected.
    ///
    /// Default: 16
    pub max_sections: usize,

    /// Maximum input length in bytes. `None` disables the check.
    ///
    /// Default: None
    pub max_length: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_sections: MAX_SECTION_COUNT,
            max_length: None,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exclusive section ceiling.
    #[must_use]
    pub const fn with_max_sections(mut self, max: usize) -> Self {
        self.max_sections = max;
        self
    }

    /// Sets the maximum input length.
    #[must_use]
    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.max_sections, 16);
        assert!(config.max_length.is_none());
    }

    #[test]
    fn builder_pattern() {
        let config = ParserConfig::new()
            .with_max_sections(8)
            .with_max_length(128);

        assert_eq!(config.max_sections, 8);
        assert_eq!(config.max_length, Some(128));
    }
}
