//! Parser and validator for RFC 9039 `urn:dev` device identifiers.
//!
//! This crate decomposes a device URN into its semantic fields: subtype,
//! organization, product, serial, identifiers, components and hardware
//! addresses.
//!
//! # Overview
//!
//! Device URNs have the structure:
//!
//! ```text
//! urn:dev:<subtype>:<body>[:<identifier>...][_<component>...]
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use urn_dev::{has_urn_dev_prefix, parse};
//!
//! assert!(has_urn_dev_prefix("urn:dev:mac:0024beffff804ff1"));
//!
//! let urn = parse("urn:dev:mac:0024beffff804ff1").unwrap();
//! assert_eq!(urn.subtype(), "mac");
//! assert_eq!(urn.eui64_identifier(), "0024beffff804ff1");
//!
//! let urn = parse("urn:dev:os:32473-12-34-56_temperature").unwrap();
//! assert_eq!(urn.organization(), "32473");
//! assert_eq!(urn.serial(), "12-34-56");
//! assert_eq!(urn.component(), ["temperature"]);
//! ```
//!
//! # Subtypes
//!
//! | Subtype | Body | Fields |
//! |---------|------|--------|
//! | `mac` | 16 lowercase hex digits | `eui64_identifier` |
//! | `ow` | 16 lowercase hex digits | `ow_identifier` |
//! | `org` | `<organization>-<identifier>` | `organization`, `identifier[0]` |
//! | `os` | `<organization>-<serial>` | `organization`, `serial` |
//! | `ops` | `<organization>-<product>-<serial>` | `organization`, `product`, `serial` |
//! | other | `<identifier>` | `identifier` |
//!
//! Unknown subtypes are accepted when the name is a lowercase letter
//! followed by lowercase letters or digits.
//!
//! # Limits
//!
//! | Limit | Default |
//! |-------|---------|
//! | `:`-separated sections | at least 4, fewer than 16 |
//! | Input length | unlimited |
//!
//! Both can be changed through [`ParserConfig`] and [`UrnDevParser`].
//!
//! # Features
//!
//! - `serde`: (de)serialize [`UrnDev`] as its string form
//! - `tracing`: emit `debug` events for rejected input and `trace` events for
//!   accepted input

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod body;
mod config;
mod constants;
mod error;
mod grammar;
#[cfg(kani)]
mod kani_impls;
mod parser;
pub mod prelude;
mod sections;
mod subtype;
mod urn_dev;

pub use body::DeviceBody;
pub use config::ParserConfig;
pub use constants::{
    DEV_LITERAL, EUI64_HEX_LENGTH, MAX_SECTION_COUNT, MIN_SECTION_COUNT, OW_ADDRESS_HEX_LENGTH,
    URN_DEV_PREFIX, URN_LITERAL,
};
pub use error::{ParseError, ParseErrorKind, TokenError};
pub use grammar::{
    Grammar, is_valid_hex_string, is_valid_identifier, is_valid_identifier_no_dash,
    is_valid_pos_number, is_valid_subtype,
};
pub use parser::UrnDevParser;
pub use subtype::{ExtensionSubtype, Subtype};
pub use urn_dev::{UrnDev, has_urn_dev_prefix};

/// Parses a urn:dev identifier with the default limits.
///
/// Equivalent to [`UrnDev::parse`].
///
/// # Errors
///
/// Returns `ParseError` if the input is not a well-formed urn:dev identifier.
pub fn parse(input: &str) -> Result<UrnDev, ParseError> {
    UrnDev::parse(input)
}
