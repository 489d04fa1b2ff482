//! Kani proof harnesses for the urn:dev grammars.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{Grammar, UrnDev, has_urn_dev_prefix};

/// Lowercase hex digits
const HEX_CHARS: &[u8] = b"0123456789abcdef";

/// Characters allowed in an identifier
const IDENTIFIER_CHARS: &[u8] = b"abcXYZ019.-";

fn arbitrary_char(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    let idx = idx % chars.len();
    chars[idx] as char
}

/// Generate a 16-digit lowercase hex address
fn arbitrary_address() -> String {
    (0..16).map(|_| arbitrary_char(HEX_CHARS)).collect()
}

/// Generate a 1-4 char identifier
fn arbitrary_identifier() -> String {
    let len: usize = kani::any();
    let len = 1 + (len % 4);
    (0..len).map(|_| arbitrary_char(IDENTIFIER_CHARS)).collect()
}

/// Proof: every well-formed mac URN parses and keeps the address
#[kani::proof]
#[kani::unwind(20)]
fn proof_mac_address_parses() {
    let address = arbitrary_address();
    let input = format!("urn:dev:mac:{address}");
    let urn = UrnDev::parse(&input).expect("valid mac urn by construction");
    assert_eq!(urn.eui64_identifier(), address);
    assert!(urn.ow_identifier().is_empty());
    assert_eq!(urn.full_name(), input);
}

/// Proof: every well-formed ow URN parses and keeps the address
#[kani::proof]
#[kani::unwind(20)]
fn proof_ow_address_parses() {
    let address = arbitrary_address();
    let input = format!("urn:dev:ow:{address}");
    let urn = UrnDev::parse(&input).expect("valid ow urn by construction");
    assert_eq!(urn.ow_identifier(), address);
    assert!(urn.eui64_identifier().is_empty());
}

/// Proof: a successful parse implies the prefix check passes
#[kani::proof]
#[kani::unwind(8)]
fn proof_parse_implies_prefix() {
    let identifier = arbitrary_identifier();
    let input = format!("urn:dev:example:{identifier}");
    if UrnDev::parse(&input).is_ok() {
        assert!(has_urn_dev_prefix(&input));
    }
}

/// Proof: a dash-free identifier is always an identifier
#[kani::proof]
#[kani::unwind(8)]
fn proof_no_dash_implies_identifier() {
    let token = arbitrary_identifier();
    if Grammar::IdentifierNoDash.matches(&token) {
        assert!(Grammar::Identifier.matches(&token));
    }
}

/// Proof: the ops body rejoins to the original section
#[kani::proof]
#[kani::unwind(8)]
fn proof_ops_rejoin() {
    let serial = arbitrary_identifier();
    let input = format!("urn:dev:ops:7-p-{serial}");
    if let Ok(urn) = UrnDev::parse(&input) {
        let rejoined = format!("{}-{}-{}", urn.organization(), urn.product(), urn.serial());
        assert_eq!(rejoined, format!("7-p-{serial}"));
    }
}
