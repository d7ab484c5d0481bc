// SPDX-License-Identifier: CC0-1.0

//! Heuristic classification of reference-like strings.
//!
//! Wallets and explorers accept txids, addresses and txrefs through the
//! same search box; [`classify`] guesses which one the user typed from
//! shape alone, without validating any checksum.

use crate::format;
use crate::limits;

/// The shape of a user-supplied reference string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InputKind {
    /// Nothing recognizable.
    Unknown,
    /// Looks like a base58 address (legacy prefix and length).
    Address,
    /// Looks like a raw transaction id (64 characters).
    Txid,
    /// Looks like a standard txref.
    Txref,
    /// Looks like an extended txref.
    ExtendedTxref,
}

/// Guesses what kind of reference `s` is.
///
/// Txid and address shapes are checked first because their lengths overlap
/// the txref tables. The txref length tables are then consulted twice,
/// once assuming the human-readable part is present and once assuming it
/// was stripped. The single ambiguous length (18 characters once
/// separators are removed, a complete mainnet txref or an extended txref
/// missing its prefix) is resolved by looking for the literal `tx1` prefix
/// on the original string.
pub fn classify(s: &str) -> InputKind {
    if s.is_empty() {
        return InputKind::Unknown;
    }
    if s.len() == 64 {
        return InputKind::Txid;
    }
    if matches!(s.as_bytes()[0], b'1' | b'3' | b'm' | b'n' | b'2') && s.len() >= 26 && s.len() < 36
    {
        return InputKind::Address;
    }

    let stripped = format::strip_unknown_chars(s);

    match (classify_with_hrp(&stripped), classify_missing_hrp(&stripped)) {
        (kind, InputKind::Unknown) => kind,
        (InputKind::Unknown, kind) => kind,
        (InputKind::Txref, InputKind::ExtendedTxref) => {
            if s.starts_with("tx1") {
                InputKind::Txref
            } else {
                InputKind::ExtendedTxref
            }
        }
        // The length tables are disjoint, no other combination matches both.
        (_, _) => InputKind::Unknown,
    }
}

/// Length table for txrefs carrying their human-readable part.
fn classify_with_hrp(stripped: &str) -> InputKind {
    match stripped.len() {
        limits::MIN_LENGTH_MAINNET | limits::MIN_LENGTH_TESTNET => InputKind::Txref,
        limits::MIN_EXTENDED_LENGTH_MAINNET | limits::MIN_EXTENDED_LENGTH_TESTNET =>
            InputKind::ExtendedTxref,
        _ => InputKind::Unknown,
    }
}

/// Length table for txrefs whose human-readable part was stripped.
fn classify_missing_hrp(stripped: &str) -> InputKind {
    match stripped.len() {
        limits::MIN_LENGTH_NO_HRP => InputKind::Txref,
        limits::MIN_EXTENDED_LENGTH_NO_HRP => InputKind::ExtendedTxref,
        _ => InputKind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_unknown() {
        assert_eq!(classify(""), InputKind::Unknown);
    }

    #[test]
    fn sixty_four_characters_look_like_a_txid() {
        assert_eq!(
            classify("f00168a2c27ef30e0f0c2b68d18a3eb0dba1c2dd65b1c8c9e4df94602c2b388c"),
            InputKind::Txid
        );
        // Only the length is consulted.
        assert_eq!(classify(&"z".repeat(64)), InputKind::Txid);
    }

    #[test]
    fn legacy_prefixes_look_like_addresses() {
        assert_eq!(classify("17VZNX1SN5NtKa8UQFxwQbFeFc3iqRYhem"), InputKind::Address);
        assert_eq!(classify("3J98t1WpEZ73CNmQviecrnyiWrnqRhWNLy"), InputKind::Address);
        assert_eq!(classify("mipcBbFg9gMiCh81Kj8tqqdgoZub1ZJRfn"), InputKind::Address);
        assert_eq!(classify("n2eMqTT929pb1RDNuqEnxdaLau1rxy3efi"), InputKind::Address);
        assert_eq!(classify("2MzQwSSnBHWHqSAqtTVQ6v47XtaisrJa1Vc"), InputKind::Address);
    }

    #[test]
    fn address_check_needs_prefix_and_length() {
        // Right prefix, too short.
        assert_eq!(classify("17VZNX1SN5NtKa8UQFxwQbFeF"), InputKind::Unknown);
        // Right length range, wrong prefix.
        assert_eq!(classify("Z7VZNX1SN5NtKa8UQFxwQbFeFc3iqRYhe"), InputKind::Unknown);
    }

    #[test]
    fn complete_txrefs() {
        assert_eq!(classify("tx1:rjk0-uqay-z9l7-m9m"), InputKind::Txref);
        assert_eq!(classify("tx1rjk0uqayz9l7m9m"), InputKind::Txref);
        assert_eq!(classify("txtest1:xjk0-uqay-zghl-p89"), InputKind::Txref);
        assert_eq!(classify("tx1:yjk0-uqay-zu4x-x22s-y6"), InputKind::ExtendedTxref);
        assert_eq!(classify("txtest1:8jk0-uqay-zu4x-gj9m-8a"), InputKind::ExtendedTxref);
    }

    #[test]
    fn txrefs_missing_their_prefix() {
        assert_eq!(classify("rjk0-uqay-z9l7-m9m"), InputKind::Txref);
        assert_eq!(classify("xjk0uqayzghlp89"), InputKind::Txref);
        assert_eq!(classify("8jk0-uqay-zu4x-gj9m-8a"), InputKind::ExtendedTxref);
    }

    #[test]
    fn eighteen_characters_need_the_prefix_to_disambiguate() {
        // A complete mainnet txref and an extended txref missing its
        // prefix strip to the same length; only `tx1` tells them apart.
        assert_eq!(classify("tx1rjk0uqayz9l7m9m"), InputKind::Txref);
        assert_eq!(classify("yjk0-uqay-zu4x-x22s-y6"), InputKind::ExtendedTxref);
        assert_eq!(classify("yjk0uqayzu4xx22sy6"), InputKind::ExtendedTxref);
    }

    #[test]
    fn noise_is_unknown() {
        assert_eq!(classify("hello"), InputKind::Unknown);
        assert_eq!(classify("tx1"), InputKind::Unknown);
        assert_eq!(classify("tx1:rjk0-uqay"), InputKind::Unknown);
    }
}
