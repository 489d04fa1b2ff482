//! Subtype classification for urn:dev identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::TokenError;
use crate::grammar::Grammar;

/// The subtype of a urn:dev identifier (the section after `urn:dev:`).
///
/// The five subtypes defined by RFC 9039 have their own body grammar. Any
/// other name matching the subtype grammar is accepted as an extension and
/// uses the generic identifier body.
///
/// Matching is case-sensitive: `MAC` is not `mac`, and since it is not a
/// valid extension name either it is rejected.
///
/// # Examples
///
/// ```
/// use urn_dev::Subtype;
///
/// assert_eq!("mac".parse::<Subtype>().unwrap(), Subtype::Mac);
/// assert!(!"example".parse::<Subtype>().unwrap().is_core());
/// assert!("MAC".parse::<Subtype>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Subtype {
    /// EUI-64 hardware address
    Mac,
    /// 1-Wire device address
    Ow,
    /// Organization number plus identifier
    Org,
    /// Organization number plus serial
    Os,
    /// Organization number, product and serial
    Ops,
    /// Any other syntactically valid subtype
    Extension(ExtensionSubtype),
}

/// A subtype name outside the RFC 9039 core set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionSubtype(String);

impl ExtensionSubtype {
    /// Creates a new extension subtype.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the name is not a lowercase letter followed by
    /// lowercase letters or digits.
    pub fn new(name: &str) -> Result<Self, TokenError> {
        Grammar::Subtype.validate(name)?;
        Ok(Self(name.to_string()))
    }

    /// Returns the subtype name as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtensionSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Subtype {
    /// Returns the string representation of this subtype.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mac => "mac",
            Self::Ow => "ow",
            Self::Org => "org",
            Self::Os => "os",
            Self::Ops => "ops",
            Self::Extension(ext) => ext.as_str(),
        }
    }

    /// Returns true if this is one of the subtypes defined by RFC 9039.
    #[must_use]
    pub const fn is_core(&self) -> bool {
        !matches!(self, Self::Extension(_))
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Subtype {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mac" => Ok(Self::Mac),
            "ow" => Ok(Self::Ow),
            "org" => Ok(Self::Org),
            "os" => Ok(Self::Os),
            "ops" => Ok(Self::Ops),
            other => Ok(Self::Extension(ExtensionSubtype::new(other)?)),
        }
    }
}
