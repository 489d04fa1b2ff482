//! Constants for urn:dev validation.

/// The literal prefix every urn:dev identifier starts with (compared case-insensitively).
pub const URN_DEV_PREFIX: &str = "urn:dev:";

/// The URN scheme literal (first section).
pub const URN_LITERAL: &str = "urn";

/// The namespace identifier literal (second section).
pub const DEV_LITERAL: &str = "dev";

/// Minimum number of `:`-separated sections: `urn`, `dev`, subtype and body.
pub const MIN_SECTION_COUNT: usize = 4;

/// Default section ceiling. Inputs with this many sections or more are rejected.
pub const MAX_SECTION_COUNT: usize = 16;

/// Length of an EUI-64 address in hex characters.
pub const EUI64_HEX_LENGTH: usize = 16;

/// Length of a 1-Wire device address in hex characters.
pub const OW_ADDRESS_HEX_LENGTH: usize = 16;

/// Section count that `mac` and `ow` reject outright.
pub(crate) const BARE_TRAILING_SECTION_COUNT: usize = 5;

pub(crate) const SECTION_SEPARATOR: char = ':';
pub(crate) const COMPONENT_SEPARATOR: char = '_';
pub(crate) const BODY_SEPARATOR: char = '-';
