// SPDX-License-Identifier: CC0-1.0

//! The bounded numeric fields of a txref.
//!
//! A txref locates a transaction by block height and position within the
//! block, optionally naming one of its outputs. Each field is allocated a
//! fixed number of payload bits, so each gets a newtype whose constructor
//! enforces the range once, up front. Values that exist can always be
//! encoded.

use core::fmt;

use crate::error::{Field, RangeError};

/// The height of the block containing the referenced transaction.
///
/// Valid heights run from 0 (the genesis block) through 16,777,215, the
/// largest value that fits the 24 payload bits allocated to the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockHeight(u32);

impl BlockHeight {
    /// Block height 0, the genesis block.
    pub const ZERO: Self = BlockHeight(0);

    /// The minimum encodable block height (0).
    pub const MIN: Self = Self::ZERO;

    /// The maximum encodable block height (2^24 - 1).
    pub const MAX: Self = BlockHeight(0xFF_FFFF);

    /// Constructs a new block height.
    ///
    /// # Errors
    ///
    /// If `height` exceeds [`BlockHeight::MAX`].
    ///
    /// # Examples
    ///
    /// ```
    /// use txref::BlockHeight;
    ///
    /// let height = BlockHeight::from_u32(466793).expect("height is in range");
    /// assert_eq!(height.to_u32(), 466793);
    /// ```
    #[inline]
    pub const fn from_u32(height: u32) -> Result<BlockHeight, RangeError> {
        if height > Self::MAX.0 {
            return Err(RangeError { field: Field::BlockHeight, value: height });
        }
        Ok(BlockHeight(height))
    }

    /// Converts this block height to a raw `u32`.
    #[inline]
    pub const fn to_u32(self) -> u32 { self.0 }

    /// Constructs a block height that is known to be in range.
    pub(crate) const fn from_u32_unchecked(height: u32) -> BlockHeight {
        debug_assert!(height <= Self::MAX.0);
        BlockHeight(height)
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BlockHeight {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let u = u32::deserialize(deserializer)?;
        BlockHeight::from_u32(u).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BlockHeight {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_u32().serialize(serializer)
    }
}

/// The position of the referenced transaction within its block.
///
/// Position 0 is the coinbase transaction. Valid positions run through
/// 32,767, the largest value that fits the 15 payload bits allocated to
/// the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxPosition(u16);

impl TxPosition {
    /// Transaction position 0, the coinbase transaction.
    pub const ZERO: Self = TxPosition(0);

    /// The minimum encodable transaction position (0).
    pub const MIN: Self = Self::ZERO;

    /// The maximum encodable transaction position (2^15 - 1).
    pub const MAX: Self = TxPosition(0x7FFF);

    /// Constructs a new transaction position.
    ///
    /// # Errors
    ///
    /// If `position` exceeds [`TxPosition::MAX`].
    #[inline]
    pub const fn from_u16(position: u16) -> Result<TxPosition, RangeError> {
        if position > Self::MAX.0 {
            return Err(RangeError { field: Field::Position, value: position as u32 });
        }
        Ok(TxPosition(position))
    }

    /// Converts this position to a raw `u16`.
    #[inline]
    pub const fn to_u16(self) -> u16 { self.0 }

    /// Constructs a position that is known to be in range.
    pub(crate) const fn from_u16_unchecked(position: u16) -> TxPosition {
        debug_assert!(position <= Self::MAX.0);
        TxPosition(position)
    }
}

impl fmt::Display for TxPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TxPosition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let u = u16::deserialize(deserializer)?;
        TxPosition::from_u16(u).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TxPosition {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_u16().serialize(serializer)
    }
}

/// The index of an output of the referenced transaction.
///
/// Only carried by the extended txref forms; a standard txref implies
/// index 0. Valid indexes run through 32,767, the largest value that fits
/// the 15 payload bits allocated to the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TxoIndex(u16);

impl TxoIndex {
    /// Txo index 0, the first output.
    pub const ZERO: Self = TxoIndex(0);

    /// The minimum encodable txo index (0).
    pub const MIN: Self = Self::ZERO;

    /// The maximum encodable txo index (2^15 - 1).
    pub const MAX: Self = TxoIndex(0x7FFF);

    /// Constructs a new txo index.
    ///
    /// # Errors
    ///
    /// If `index` exceeds [`TxoIndex::MAX`].
    #[inline]
    pub const fn from_u16(index: u16) -> Result<TxoIndex, RangeError> {
        if index > Self::MAX.0 {
            return Err(RangeError { field: Field::TxoIndex, value: index as u32 });
        }
        Ok(TxoIndex(index))
    }

    /// Converts this txo index to a raw `u16`.
    #[inline]
    pub const fn to_u16(self) -> u16 { self.0 }

    /// Constructs a txo index that is known to be in range.
    pub(crate) const fn from_u16_unchecked(index: u16) -> TxoIndex {
        debug_assert!(index <= Self::MAX.0);
        TxoIndex(index)
    }
}

impl fmt::Display for TxoIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.0, f) }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TxoIndex {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let u = u16::deserialize(deserializer)?;
        TxoIndex::from_u16(u).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TxoIndex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_u16().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn block_height_range() {
        assert!(BlockHeight::from_u32(0).is_ok());
        assert!(BlockHeight::from_u32(16_777_215).is_ok());
        assert!(BlockHeight::from_u32(16_777_216).is_err());
        assert_eq!(BlockHeight::from_u32(16_777_215), Ok(BlockHeight::MAX));
        assert_eq!(BlockHeight::MIN, BlockHeight::ZERO);
    }

    #[test]
    fn position_range() {
        assert!(TxPosition::from_u16(0).is_ok());
        assert!(TxPosition::from_u16(32_767).is_ok());
        assert!(TxPosition::from_u16(32_768).is_err());
        assert_eq!(TxPosition::from_u16(32_767), Ok(TxPosition::MAX));
    }

    #[test]
    fn txo_index_range() {
        assert!(TxoIndex::from_u16(0).is_ok());
        assert!(TxoIndex::from_u16(32_767).is_ok());
        assert!(TxoIndex::from_u16(32_768).is_err());
        assert_eq!(TxoIndex::from_u16(32_767), Ok(TxoIndex::MAX));
    }

    #[test]
    fn display_is_the_inner_value() {
        let height = BlockHeight::from_u32(466793).unwrap();
        assert_eq!(format!("{}", height), "466793");

        let position = TxPosition::from_u16(2205).unwrap();
        assert_eq!(format!("{}", position), "2205");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_round_trips_in_range_values() {
        use serde_test::{assert_tokens, Token};

        let height = BlockHeight::from_u32(466793).unwrap();
        assert_tokens(&height, &[Token::U32(466793)]);

        let position = TxPosition::from_u16(2205).unwrap();
        assert_tokens(&position, &[Token::U16(2205)]);

        let txo_index = TxoIndex::from_u16(6844).unwrap();
        assert_tokens(&txo_index, &[Token::U16(6844)]);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_rejects_out_of_range_height() {
        use serde_test::{assert_de_tokens_error, Token};

        assert_de_tokens_error::<BlockHeight>(
            &[Token::U32(16_777_216)],
            "block height 16777216 is too large, the maximum is 16777215",
        );
    }
}
