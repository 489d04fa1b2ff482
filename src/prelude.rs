//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use urn_dev::prelude::*;
//!
//! let urn = UrnDev::parse("urn:dev:ow:264437f5000000ed_humidity").unwrap();
//! assert_eq!(urn.ow_identifier(), "264437f5000000ed");
//! ```
//!
//! The scheme literals and section limits are left out; import them from the
//! crate root when needed.

pub use crate::{
    // Core types
    DeviceBody, ExtensionSubtype, Grammar, Subtype, UrnDev,
    // Parser
    ParserConfig, UrnDevParser, has_urn_dev_prefix, parse,
    // Errors
    ParseError, ParseErrorKind, TokenError,
    // Validators
    is_valid_hex_string, is_valid_identifier, is_valid_identifier_no_dash, is_valid_pos_number,
    is_valid_subtype,
};
