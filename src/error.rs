//! Error types for urn:dev parsing.

use std::fmt;

use crate::grammar::Grammar;

/// Errors that can occur when parsing a urn:dev identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the grammar the offending token was expected to match, if any.
    #[must_use]
    pub const fn grammar(&self) -> Option<Grammar> {
        self.kind.grammar()
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Input exceeds the configured maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Wrong number of `:`-separated sections
    MalformedUrn {
        /// Number of sections found
        sections: usize,
        /// Minimum allowed section count
        min: usize,
        /// Section count at and above which input is rejected
        max: usize,
    },
    /// First section is not `urn`
    MissingUrnLiteral {
        /// The section that was found
        found: String,
    },
    /// Second section is not `dev`
    MissingDevLiteral {
        /// The section that was found
        found: String,
    },
    /// A `_`-delimited component is not an identifier
    InvalidComponent {
        /// The invalid component
        token: String,
        /// Index in the component list
        index: usize,
        /// Reason for invalidity
        reason: TokenError,
    },
    /// A body section is not an identifier
    InvalidIdentifier {
        /// The invalid identifier
        token: String,
        /// Index in the identifier list
        index: usize,
        /// Reason for invalidity
        reason: TokenError,
    },
    /// `mac` body is not a 16-digit lowercase hex EUI-64
    InvalidEui64 {
        /// The invalid address
        token: String,
        /// Reason for invalidity
        reason: TokenError,
    },
    /// `ow` body is not a 16-digit lowercase hex 1-Wire address
    InvalidOwAddress {
        /// The invalid address
        token: String,
        /// Reason for invalidity
        reason: TokenError,
    },
    /// `mac` or `ow` followed by exactly one bare identifier
    UnexpectedTrailingIdentifier {
        /// The subtype being parsed
        subtype: &'static str,
        /// The trailing identifier
        token: String,
    },
    /// `org` or `os` body without the `-` between organization and the rest
    MissingOrgSeparator {
        /// The subtype being parsed
        subtype: &'static str,
        /// The body section
        body: String,
    },
    /// Organization number is not a positive decimal number
    InvalidOrgNumber {
        /// The subtype being parsed
        subtype: &'static str,
        /// The invalid organization number
        token: String,
        /// Reason for invalidity
        reason: TokenError,
    },
    /// `ops` body does not split into organization, product and serial
    InvalidOpsShape {
        /// The body section
        body: String,
        /// Number of `-`-separated parts found
        parts: usize,
    },
    /// `ops` product is not a dash-free identifier
    InvalidProduct {
        /// The invalid product
        token: String,
        /// Reason for invalidity
        reason: TokenError,
    },
    /// `os` or `ops` serial is not an identifier
    InvalidSerial {
        /// The subtype being parsed
        subtype: &'static str,
        /// The invalid serial
        token: String,
        /// Reason for invalidity
        reason: TokenError,
    },
    /// Unknown subtype that does not match the subtype grammar
    InvalidSubtype {
        /// The invalid subtype
        token: String,
        /// Reason for invalidity
        reason: TokenError,
    },
}

impl ParseErrorKind {
    /// Returns the grammar the offending token was expected to match, if any.
    #[must_use]
    pub const fn grammar(&self) -> Option<Grammar> {
        match self {
            Self::InvalidComponent { .. }
            | Self::InvalidIdentifier { .. }
            | Self::UnexpectedTrailingIdentifier { .. }
            | Self::InvalidSerial { .. } => Some(Grammar::Identifier),
            Self::InvalidEui64 { .. } | Self::InvalidOwAddress { .. } => Some(Grammar::HexString),
            Self::InvalidOrgNumber { .. } => Some(Grammar::PosNumber),
            Self::InvalidProduct { .. } => Some(Grammar::IdentifierNoDash),
            Self::InvalidSubtype { .. } => Some(Grammar::Subtype),
            Self::TooLong { .. }
            | Self::MalformedUrn { .. }
            | Self::MissingUrnLiteral { .. }
            | Self::MissingDevLiteral { .. }
            | Self::MissingOrgSeparator { .. }
            | Self::InvalidOpsShape { .. } => None,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse urn:dev '{}': {}", self.input, self.kind)
    }
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooLong { max, actual } => {
                write!(f, "input length {actual} exceeds maximum {max}")
            }
            Self::MalformedUrn { sections, min, max } => {
                write!(
                    f,
                    "found {sections} ':'-separated sections; expected at least {min} and fewer than {max}"
                )
            }
            Self::MissingUrnLiteral { found } => {
                write!(f, "expected 'urn' as first section, found '{found}'")
            }
            Self::MissingDevLiteral { found } => {
                write!(f, "expected 'dev' as second section, found '{found}'")
            }
            Self::InvalidComponent {
                token,
                index,
                reason,
            } => {
                write!(f, "invalid component '{token}' at index {index}: {reason}")
            }
            Self::InvalidIdentifier {
                token,
                index,
                reason,
            } => {
                write!(f, "invalid identifier '{token}' at index {index}: {reason}")
            }
            Self::InvalidEui64 { token, reason } => {
                write!(f, "invalid EUI-64 '{token}': {reason}")
            }
            Self::InvalidOwAddress { token, reason } => {
                write!(f, "invalid 1-Wire address '{token}': {reason}")
            }
            Self::UnexpectedTrailingIdentifier { subtype, token } => {
                write!(
                    f,
                    "'{subtype}' address cannot be followed by a single identifier '{token}'"
                )
            }
            Self::MissingOrgSeparator { subtype, body } => {
                write!(
                    f,
                    "'{subtype}' body '{body}' has no '-' after the organization number"
                )
            }
            Self::InvalidOrgNumber {
                subtype,
                token,
                reason,
            } => {
                write!(f, "invalid '{subtype}' organization number '{token}': {reason}")
            }
            Self::InvalidOpsShape { body, parts } => {
                write!(
                    f,
                    "'ops' body '{body}' has {parts} '-'-separated parts, expected organization-product-serial"
                )
            }
            Self::InvalidProduct { token, reason } => {
                write!(f, "invalid 'ops' product '{token}': {reason}")
            }
            Self::InvalidSerial {
                subtype,
                token,
                reason,
            } => {
                write!(f, "invalid '{subtype}' serial '{token}': {reason}")
            }
            Self::InvalidSubtype { token, reason } => {
                write!(f, "invalid subtype '{token}': {reason}")
            }
        }
    }
}

/// Errors for token validation against a [`Grammar`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token is empty
    Empty,
    /// Character outside the grammar's character class
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the token
        position: usize,
    },
    /// Number starts with zero
    LeadingZero,
    /// Hex string has an odd number of digits
    OddLength {
        /// Actual length
        actual: usize,
    },
    /// Fixed-length token has the wrong length
    WrongLength {
        /// Required length
        expected: usize,
        /// Actual length
        actual: usize,
    },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "token cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}")
            }
            Self::LeadingZero => write!(f, "number cannot start with '0'"),
            Self::OddLength { actual } => {
                write!(f, "hex string has odd length {actual}")
            }
            Self::WrongLength { expected, actual } => {
                write!(f, "expected {expected} characters, found {actual}")
            }
        }
    }
}

impl std::error::Error for TokenError {}
