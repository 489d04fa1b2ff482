//! Character-class grammars for urn:dev tokens.
//!
//! Each grammar is an anchored scanner over the whole token. They correspond
//! to the RFC 9039 ABNF rules:
//!
//! ```text
//! identifier          = 1*devunreserved
//! identifiernodash    = 1*devunreservednodash
//! devunreservednodash = ALPHA / DIGIT / "."
//! devunreserved       = devunreservednodash / "-"
//! hexstring           = 1*(hexdigit hexdigit)
//! hexdigit            = DIGIT / "a" / "b" / "c" / "d" / "e" / "f"
//! posnumber           = NZDIGIT *DIGIT
//! subtype             = LALPHA *(DIGIT / LALPHA)
//! ```

use std::fmt;

use crate::error::TokenError;

/// A token grammar used somewhere in a urn:dev identifier.
///
/// # Examples
///
/// ```
/// use urn_dev::Grammar;
///
/// assert!(Grammar::Identifier.matches("new-1-2-3"));
/// assert!(!Grammar::IdentifierNoDash.matches("new-1"));
/// assert!(Grammar::HexString.matches("0024beffff804ff1"));
/// assert!(!Grammar::PosNumber.matches("032473"));
/// assert!(!Grammar::Subtype.matches("INVALID"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// Letters, digits, dot and dash; at least one character.
    Identifier,
    /// Letters, digits and dot; at least one character.
    IdentifierNoDash,
    /// Pairs of lowercase hex digits; at least one pair.
    HexString,
    /// Decimal number without a leading zero.
    PosNumber,
    /// Lowercase letter followed by lowercase letters or digits.
    Subtype,
}

impl Grammar {
    /// Returns the short name of the grammar.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::IdentifierNoDash => "dash-free identifier",
            Self::HexString => "hex string",
            Self::PosNumber => "positive number",
            Self::Subtype => "subtype",
        }
    }

    /// Returns the ABNF rule for the grammar.
    #[must_use]
    pub const fn abnf(self) -> &'static str {
        match self {
            Self::Identifier => "1*(ALPHA / DIGIT / \".\" / \"-\")",
            Self::IdentifierNoDash => "1*(ALPHA / DIGIT / \".\")",
            Self::HexString => "1*(hexdigit hexdigit)",
            Self::PosNumber => "NZDIGIT *DIGIT",
            Self::Subtype => "LALPHA *(DIGIT / LALPHA)",
        }
    }

    /// Validates a whole token against the grammar.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` describing the first violation found.
    pub fn validate(self, token: &str) -> Result<(), TokenError> {
        if token.is_empty() {
            return Err(TokenError::Empty);
        }

        match self {
            Self::Identifier => scan(token, |_, c| is_devunreserved(c)),
            Self::IdentifierNoDash => scan(token, |_, c| is_devunreserved_nodash(c)),
            Self::HexString => {
                scan(token, |_, c| is_lower_hex(c))?;
                if token.len() % 2 == 0 {
                    Ok(())
                } else {
                    Err(TokenError::OddLength {
                        actual: token.len(),
                    })
                }
            }
            Self::PosNumber => {
                if token.starts_with('0') {
                    return Err(TokenError::LeadingZero);
                }
                scan(token, |_, c| c.is_ascii_digit())
            }
            Self::Subtype => scan(token, |i, c| {
                c.is_ascii_lowercase() || (i > 0 && c.is_ascii_digit())
            }),
        }
    }

    /// Returns true if the token matches the grammar.
    #[must_use]
    pub fn matches(self, token: &str) -> bool {
        self.validate(token).is_ok()
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.abnf())
    }
}

/// Returns true if the token is a valid identifier.
#[must_use]
pub fn is_valid_identifier(token: &str) -> bool {
    Grammar::Identifier.matches(token)
}

/// Returns true if the token is a valid identifier without dashes.
#[must_use]
pub fn is_valid_identifier_no_dash(token: &str) -> bool {
    Grammar::IdentifierNoDash.matches(token)
}

/// Returns true if the token is a non-empty, even-length lowercase hex string.
#[must_use]
pub fn is_valid_hex_string(token: &str) -> bool {
    Grammar::HexString.matches(token)
}

/// Returns true if the token is a positive decimal number without leading zeros.
#[must_use]
pub fn is_valid_pos_number(token: &str) -> bool {
    Grammar::PosNumber.matches(token)
}

/// Returns true if the token is a syntactically valid subtype name.
#[must_use]
pub fn is_valid_subtype(token: &str) -> bool {
    Grammar::Subtype.matches(token)
}

/// Validates a hex string of an exact length (EUI-64 and 1-Wire addresses).
pub(crate) fn validate_hex_address(token: &str, expected: usize) -> Result<(), TokenError> {
    if token.len() != expected {
        return Err(TokenError::WrongLength {
            expected,
            actual: token.len(),
        });
    }
    Grammar::HexString.validate(token)
}

fn scan(token: &str, valid: impl Fn(usize, char) -> bool) -> Result<(), TokenError> {
    for (i, c) in token.chars().enumerate() {
        if !valid(i, c) {
            return Err(TokenError::InvalidChar { char: c, position: i });
        }
    }
    Ok(())
}

const fn is_devunreserved_nodash(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.'
}

const fn is_devunreserved(c: char) -> bool {
    is_devunreserved_nodash(c) || c == '-'
}

const fn is_lower_hex(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='f')
}
