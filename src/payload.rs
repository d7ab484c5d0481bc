// SPDX-License-Identifier: CC0-1.0

//! Bit-level packing and unpacking of txref payloads.
//!
//! The payload is a run of 5-bit symbols: the magic code, then a symbol
//! whose lowest bit is the version (always 0) and whose upper four bits
//! start the block height, then the remaining height and position bits in
//! least-significant-first order. The extended forms append three symbols
//! for the txo index.

use bech32::Fe32;

use crate::error::{DecodeError, InvalidPayloadSizeError, UnsupportedVersionError};
use crate::fields::{BlockHeight, TxPosition, TxoIndex};
use crate::magic::MagicCode;

/// Number of symbols in a standard payload.
pub(crate) const STANDARD_SIZE: usize = 9;

/// Number of symbols in an extended payload.
pub(crate) const EXTENDED_SIZE: usize = 12;

/// An assembled payload, ready for checksumming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Payload {
    Standard([Fe32; STANDARD_SIZE]),
    Extended([Fe32; EXTENDED_SIZE]),
}

impl Payload {
    /// Packs the standard form: magic code, version 0, height, position.
    pub(crate) fn standard(
        magic: MagicCode,
        block_height: BlockHeight,
        position: TxPosition,
    ) -> Payload {
        let h = block_height.to_u32();
        let p = u32::from(position.to_u16());

        let mut dp = [0u8; STANDARD_SIZE];
        dp[0] = magic.to_u8();
        // The version bit is the lowest bit of the second symbol; the low
        // four height bits sit above it.
        dp[1] = ((h & 0xF) << 1) as u8;
        dp[2] = ((h >> 4) & 0x1F) as u8;
        dp[3] = ((h >> 9) & 0x1F) as u8;
        dp[4] = ((h >> 14) & 0x1F) as u8;
        dp[5] = ((h >> 19) & 0x1F) as u8;
        dp[6] = (p & 0x1F) as u8;
        dp[7] = ((p >> 5) & 0x1F) as u8;
        dp[8] = ((p >> 10) & 0x1F) as u8;
        Payload::Standard(dp.map(fe))
    }

    /// Packs the extended form, which appends the txo index.
    pub(crate) fn extended(
        magic: MagicCode,
        block_height: BlockHeight,
        position: TxPosition,
        txo_index: TxoIndex,
    ) -> Payload {
        let h = block_height.to_u32();
        let p = u32::from(position.to_u16());
        let t = u32::from(txo_index.to_u16());

        let mut dp = [0u8; EXTENDED_SIZE];
        dp[0] = magic.to_u8();
        dp[1] = ((h & 0xF) << 1) as u8;
        dp[2] = ((h >> 4) & 0x1F) as u8;
        dp[3] = ((h >> 9) & 0x1F) as u8;
        dp[4] = ((h >> 14) & 0x1F) as u8;
        dp[5] = ((h >> 19) & 0x1F) as u8;
        dp[6] = (p & 0x1F) as u8;
        dp[7] = ((p >> 5) & 0x1F) as u8;
        dp[8] = ((p >> 10) & 0x1F) as u8;
        dp[9] = (t & 0x1F) as u8;
        dp[10] = ((t >> 5) & 0x1F) as u8;
        dp[11] = ((t >> 10) & 0x1F) as u8;
        Payload::Extended(dp.map(fe))
    }

    pub(crate) fn as_slice(&self) -> &[Fe32] {
        match self {
            Payload::Standard(dp) => dp,
            Payload::Extended(dp) => dp,
        }
    }
}

/// Field values recovered from a checksum-validated payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unpacked {
    pub(crate) magic: MagicCode,
    pub(crate) block_height: BlockHeight,
    pub(crate) position: TxPosition,
    pub(crate) txo_index: TxoIndex,
}

/// Reverses the packing shifts.
///
/// A 9-symbol payload defines the txo index as zero without reading any
/// symbol for it.
pub(crate) fn unpack(dp: &[Fe32]) -> Result<Unpacked, DecodeError> {
    if dp.len() != STANDARD_SIZE && dp.len() != EXTENDED_SIZE {
        return Err(InvalidPayloadSizeError(dp.len()).into());
    }

    let magic = MagicCode::try_from(dp[0].to_u8())?;

    let version = dp[1].to_u8() & 1;
    if version != 0 {
        return Err(UnsupportedVersionError(version).into());
    }

    let v = |i: usize| u32::from(dp[i].to_u8());

    let height = (v(1) >> 1) | (v(2) << 4) | (v(3) << 9) | (v(4) << 14) | (v(5) << 19);
    let position = (v(6) | (v(7) << 5) | (v(8) << 10)) as u16;
    let txo_index = if dp.len() == EXTENDED_SIZE {
        (v(9) | (v(10) << 5) | (v(11) << 10)) as u16
    } else {
        0
    };

    Ok(Unpacked {
        magic,
        block_height: BlockHeight::from_u32_unchecked(height),
        position: TxPosition::from_u16_unchecked(position),
        txo_index: TxoIndex::from_u16_unchecked(txo_index),
    })
}

/// Converts a 5-bit chunk to a field element; all call sites mask to five
/// bits first.
fn fe(value: u8) -> Fe32 {
    Fe32::try_from(value).expect("value is masked to five bits")
}
