// SPDX-License-Identifier: CC0-1.0

//! Encoding and decoding of bech32m transaction position references.
//!
//! A txref is a short, checksummed, human-typeable reference to a confirmed
//! transaction. Instead of carrying a transaction hash it encodes the block
//! height and the transaction's position within that block, optionally
//! extended with the index of one of the transaction's outputs:
//!
//! ```text
//! tx1:rjk0-uqay-z9l7-m9m          block 466793, transaction 2205
//! txtest1:xjk0-uqay-zghl-p89      the same location on testnet
//! tx1:yjk0-uqay-zu4x-x22s-y6      extended form naming output 6844
//! ```
//!
//! Encoding always produces the modern bech32m checksum. Strings carrying
//! the original bech32 checksum still decode, flagged with commentary naming
//! the updated spelling. Decoding also tolerates the display separators and
//! a completely stripped human-readable part.
//!
//! This crate can be used in a no-std environment but requires an allocator.

// NB: This crate is empty if `alloc` is not enabled.
#![cfg(feature = "alloc")]
#![no_std]
// Experimental features we need.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(bench, feature(test))]
// Coding conventions.
#![warn(missing_docs)]
#![doc(test(attr(warn(unused))))]
// Exclude lints we don't think are valuable.
#![allow(clippy::manual_range_contains)] // More readable than clippy's format.

extern crate alloc;

#[cfg(bench)]
extern crate test;

#[cfg(feature = "std")]
extern crate std;

pub mod classify;
pub mod error;
pub mod fields;
pub mod format;
pub mod limits;
pub mod magic;
mod payload;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Bech32m, Fe32IterExt, Hrp};

use crate::payload::{Payload, Unpacked};

#[rustfmt::skip]                // Keep public re-exports separate.
#[doc(inline)]
pub use self::{
    classify::{classify, InputKind},
    error::{
        ChecksumError, DecodeError, EncodeError, FormatError, InvalidHrpError,
        InvalidPayloadSizeError, RangeError, UnsupportedVariantError, UnsupportedVersionError,
    },
    fields::{BlockHeight, TxPosition, TxoIndex},
    magic::MagicCode,
};

/// The canonical human-readable part of mainnet txrefs.
pub const HRP_MAIN: &str = "tx";

/// The canonical human-readable part of testnet txrefs.
pub const HRP_TEST: &str = "txtest";

/// The checksum algorithm a decoded string carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// The original checksum, accepted for backward compatibility only.
    Bech32,
    /// The current checksum; the only one encoding produces.
    Bech32m,
}

impl Variant {
    /// Returns true for strings that should be re-encoded with the current
    /// checksum.
    pub fn is_legacy(self) -> bool { matches!(self, Variant::Bech32) }
}

/// Everything recovered from one txref string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct DecodedTxref {
    /// The human-readable part the string carried (or the one recovered
    /// from its first data character), lowercased.
    pub hrp: String,
    /// The magic code carried in the first payload symbol.
    pub magic: MagicCode,
    /// Height of the block containing the transaction.
    pub block_height: BlockHeight,
    /// Position of the transaction within its block.
    pub position: TxPosition,
    /// Output index; [`TxoIndex::ZERO`] for the standard forms.
    pub txo_index: TxoIndex,
    /// The checksum algorithm the string carried.
    pub variant: Variant,
    /// The input cleaned up and pretty-printed. This is not a re-encode: a
    /// legacy-checksum string keeps its legacy spelling here, with the
    /// updated spelling in `commentary`.
    pub txref: String,
    /// Migration advice, present when `variant` is the legacy checksum.
    pub commentary: Option<String>,
}

/// Encodes a mainnet txref.
///
/// Produces the standard form unless `txo_index` is non-zero or
/// `force_extended` is set; a zero index is otherwise dropped from the
/// encoding and implied on decode.
///
/// # Examples
///
/// ```
/// use txref::{BlockHeight, TxPosition, TxoIndex};
///
/// let height = BlockHeight::from_u32(466793).expect("height is in range");
/// let position = TxPosition::from_u16(2205).expect("position is in range");
///
/// let txref = txref::encode(height, position, TxoIndex::ZERO, false);
/// assert_eq!(txref, "tx1:rjk0-uqay-z9l7-m9m");
/// ```
pub fn encode(
    block_height: BlockHeight,
    position: TxPosition,
    txo_index: TxoIndex,
    force_extended: bool,
) -> String {
    encode_with_hrp(HRP_MAIN, block_height, position, txo_index, force_extended)
        .expect("the canonical hrp is valid and short")
}

/// Encodes a testnet txref.
///
/// Produces the standard form unless `txo_index` is non-zero or
/// `force_extended` is set.
pub fn encode_testnet(
    block_height: BlockHeight,
    position: TxPosition,
    txo_index: TxoIndex,
    force_extended: bool,
) -> String {
    encode_testnet_with_hrp(HRP_TEST, block_height, position, txo_index, force_extended)
        .expect("the canonical hrp is valid and short")
}

/// Encodes a mainnet txref under a caller-chosen human-readable part.
///
/// The mainnet magic codes are used regardless of `hrp`; this exists for
/// deployments that keep the payload layout but claim their own prefix.
///
/// # Errors
///
/// If `hrp` violates the bech32 rules, or is too long for the display
/// formatting (the canonical prefixes never are).
pub fn encode_with_hrp(
    hrp: &str,
    block_height: BlockHeight,
    position: TxPosition,
    txo_index: TxoIndex,
    force_extended: bool,
) -> Result<String, EncodeError> {
    let hrp = parse_hrp(hrp)?;
    if txo_index == TxoIndex::ZERO && !force_extended {
        txref_encode(hrp, MagicCode::Main, block_height, position)
    } else {
        txref_ext_encode(hrp, MagicCode::MainExtended, block_height, position, txo_index)
    }
}

/// Encodes a testnet txref under a caller-chosen human-readable part.
///
/// # Errors
///
/// Same as [`encode_with_hrp`].
pub fn encode_testnet_with_hrp(
    hrp: &str,
    block_height: BlockHeight,
    position: TxPosition,
    txo_index: TxoIndex,
    force_extended: bool,
) -> Result<String, EncodeError> {
    let hrp = parse_hrp(hrp)?;
    if txo_index == TxoIndex::ZERO && !force_extended {
        txref_encode(hrp, MagicCode::Test, block_height, position)
    } else {
        txref_ext_encode(hrp, MagicCode::TestExtended, block_height, position, txo_index)
    }
}

/// Decodes a txref, tolerating display separators and a stripped
/// human-readable part.
///
/// The input is first stripped of every character outside the bech32
/// alphabet. If what remains has the length of a prefixless txref and leads
/// with a magic code character, the canonical prefix for that magic code is
/// re-attached before decoding.
///
/// # Examples
///
/// ```
/// let decoded = txref::decode("rjk0-uqay-z9l7-m9m").expect("valid txref");
///
/// assert_eq!(decoded.hrp, "tx");
/// assert_eq!(decoded.block_height.to_u32(), 466793);
/// assert_eq!(decoded.position.to_u16(), 2205);
/// assert_eq!(decoded.txref, "tx1:rjk0-uqay-z9l7-m9m");
/// ```
///
/// # Errors
///
/// If neither checksum algorithm validates the string, the payload is not 9
/// or 12 symbols, the magic code is unassigned, or the version bit is set.
pub fn decode(s: &str) -> Result<DecodedTxref, DecodeError> {
    let cleaned = add_hrp_if_needed(format::strip_unknown_chars(s));

    let (parsed, variant) = match CheckedHrpstring::new::<Bech32m>(&cleaned) {
        Ok(parsed) => (parsed, Variant::Bech32m),
        Err(modern) => match CheckedHrpstring::new::<Bech32>(&cleaned) {
            Ok(parsed) => (parsed, Variant::Bech32),
            // Report the failure of the algorithm encoders are expected to
            // use, not the legacy fallback's.
            Err(_) => return Err(ChecksumError(modern).into()),
        },
    };

    let hrp = parsed.hrp();
    // `fe32_iter` declares a type parameter its signature never uses; any
    // u8 iterator type satisfies it.
    let dp = parsed.fe32_iter::<core::iter::Empty<u8>>().collect::<Vec<_>>();
    let fields = payload::unpack(&dp)?;

    let txref = format::pretty_print(&cleaned, hrp.len())?;
    let commentary = if variant.is_legacy() {
        let updated = updated_txref(hrp, &fields)?;
        Some(format!(
            "The txref {} uses an old encoding scheme and should be updated to {}. \
             See BIP-350 for the reasons the bech32m checksum replaced bech32.",
            txref, updated
        ))
    } else {
        None
    };

    Ok(DecodedTxref {
        hrp: hrp.to_lowercase(),
        magic: fields.magic,
        block_height: fields.block_height,
        position: fields.position,
        txo_index: fields.txo_index,
        variant,
        txref,
        commentary,
    })
}

/// Encodes the standard form: 9 payload symbols, no txo index.
fn txref_encode(
    hrp: Hrp,
    magic: MagicCode,
    block_height: BlockHeight,
    position: TxPosition,
) -> Result<String, EncodeError> {
    if magic.is_extended() {
        return Err(UnsupportedVariantError::NotStandard(magic).into());
    }
    let payload = Payload::standard(magic, block_height, position);
    checksum_and_format(hrp, &payload).map_err(EncodeError::Format)
}

/// Encodes the extended form: 12 payload symbols including the txo index.
fn txref_ext_encode(
    hrp: Hrp,
    magic: MagicCode,
    block_height: BlockHeight,
    position: TxPosition,
    txo_index: TxoIndex,
) -> Result<String, EncodeError> {
    if !magic.is_extended() {
        return Err(UnsupportedVariantError::NotExtended(magic).into());
    }
    let payload = Payload::extended(magic, block_height, position, txo_index);
    checksum_and_format(hrp, &payload).map_err(EncodeError::Format)
}

/// Checksums a payload under the modern algorithm and adds the display
/// separators.
fn checksum_and_format(hrp: Hrp, payload: &Payload) -> Result<String, FormatError> {
    let plain: String =
        payload.as_slice().iter().copied().with_checksum::<Bech32m>(&hrp).chars().collect();
    format::pretty_print(&plain, hrp.len())
}

/// Re-encodes decoded fields under the modern checksum, for the migration
/// commentary of legacy strings.
fn updated_txref(hrp: Hrp, fields: &Unpacked) -> Result<String, DecodeError> {
    let updated = if fields.magic.is_extended() {
        txref_ext_encode(hrp, fields.magic, fields.block_height, fields.position, fields.txo_index)
    } else {
        txref_encode(hrp, fields.magic, fields.block_height, fields.position)
    };
    updated.map_err(|e| match e {
        EncodeError::UnsupportedVariant(e) => DecodeError::UnsupportedVariant(e),
        EncodeError::Format(e) => DecodeError::Format(e),
        EncodeError::Hrp(_) => unreachable!("re-encoding reuses the already parsed hrp"),
    })
}

/// Re-attaches a canonical human-readable part to a stripped string.
///
/// Transports that reject the bech32 separator sometimes drop the prefix
/// entirely; when the remainder has a prefixless txref length and leads
/// with a magic code character, the prefix is recoverable.
fn add_hrp_if_needed(stripped: String) -> String {
    let has_txref_length = stripped.len() == limits::MIN_LENGTH_NO_HRP
        || stripped.len() == limits::MIN_EXTENDED_LENGTH_NO_HRP;
    if !has_txref_length {
        return stripped;
    }
    match stripped.chars().next().and_then(MagicCode::from_char) {
        Some(magic) => {
            let mut readable = String::with_capacity(magic.hrp().len() + 1 + stripped.len());
            readable.push_str(magic.hrp());
            readable.push('1');
            readable.push_str(&stripped);
            readable
        }
        None => stripped,
    }
}

/// Parses a caller-supplied human-readable part.
fn parse_hrp(hrp: &str) -> Result<Hrp, InvalidHrpError> {
    Hrp::parse(hrp).map_err(InvalidHrpError)
}

#[cfg(bench)]
mod benches {
    use test::{black_box, Bencher};

    use super::*;

    #[bench]
    pub fn bench_encode(bh: &mut Bencher) {
        let height = BlockHeight::from_u32(466793).unwrap();
        let position = TxPosition::from_u16(2205).unwrap();

        bh.iter(|| {
            let txref = encode(height, position, TxoIndex::ZERO, false);
            black_box(txref);
        })
    }

    #[bench]
    pub fn bench_decode(bh: &mut Bencher) {
        bh.iter(|| {
            let decoded = decode("tx1:yjk0-uqay-zu4x-x22s-y6");
            black_box(decoded).unwrap();
        })
    }
}
