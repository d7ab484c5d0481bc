// SPDX-License-Identifier: CC0-1.0

//! The magic codes assigned to the txref forms.

use core::fmt;

use bech32::Fe32;

use crate::error::UnsupportedVariantError;
use crate::{HRP_MAIN, HRP_TEST};

/// The magic code carried in the first payload symbol of every txref.
///
/// The code selects the network the reference belongs to and whether the
/// payload carries a txo index (the extended form). Four codes are
/// assigned; the remaining 5-bit values are reserved and rejected on
/// decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MagicCode {
    /// Mainnet, standard form.
    Main = 3,
    /// Mainnet, extended form carrying a txo index.
    MainExtended = 4,
    /// Testnet, standard form.
    Test = 6,
    /// Testnet, extended form carrying a txo index.
    TestExtended = 7,
}

impl MagicCode {
    /// Returns the 5-bit value of this magic code.
    #[inline]
    pub const fn to_u8(self) -> u8 { self as u8 }

    /// Returns the bech32 character this code encodes to.
    ///
    /// The magic code is the first payload symbol, so this is the first
    /// data character of every txref carrying the code: `r`, `y`, `x` or
    /// `8`.
    pub fn to_char(self) -> char { self.to_fe32().to_char() }

    /// Returns the magic code that encodes to `c`, if there is one.
    pub fn from_char(c: char) -> Option<MagicCode> {
        let fe = Fe32::from_char(c).ok()?;
        MagicCode::try_from(fe.to_u8()).ok()
    }

    /// Returns true for the codes whose payload carries a txo index.
    #[inline]
    pub const fn is_extended(self) -> bool {
        matches!(self, MagicCode::MainExtended | MagicCode::TestExtended)
    }

    /// Returns the canonical human-readable part of this code's network.
    pub const fn hrp(self) -> &'static str {
        match self {
            MagicCode::Main | MagicCode::MainExtended => HRP_MAIN,
            MagicCode::Test | MagicCode::TestExtended => HRP_TEST,
        }
    }

    pub(crate) fn to_fe32(self) -> Fe32 {
        match self {
            MagicCode::Main => Fe32::R,
            MagicCode::MainExtended => Fe32::Y,
            MagicCode::Test => Fe32::X,
            MagicCode::TestExtended => Fe32::_8,
        }
    }
}

impl TryFrom<u8> for MagicCode {
    type Error = UnsupportedVariantError;

    /// Returns the magic code with value `value`.
    ///
    /// # Errors
    ///
    /// If `value` is not one of the four assigned codes.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            3 => Ok(MagicCode::Main),
            4 => Ok(MagicCode::MainExtended),
            6 => Ok(MagicCode::Test),
            7 => Ok(MagicCode::TestExtended),
            unknown => Err(UnsupportedVariantError::UnknownMagic(unknown)),
        }
    }
}

impl fmt::Display for MagicCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { fmt::Display::fmt(&self.to_u8(), f) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UnsupportedVariantError;

    #[test]
    fn value_round_trip() {
        for magic in
            [MagicCode::Main, MagicCode::MainExtended, MagicCode::Test, MagicCode::TestExtended]
        {
            assert_eq!(MagicCode::try_from(magic.to_u8()), Ok(magic));
        }
    }

    #[test]
    fn reserved_values_are_rejected() {
        for value in (0..32u8).filter(|v| !matches!(v, 3 | 4 | 6 | 7)) {
            assert_eq!(
                MagicCode::try_from(value),
                Err(UnsupportedVariantError::UnknownMagic(value))
            );
        }
    }

    #[test]
    fn char_mapping() {
        assert_eq!(MagicCode::Main.to_char(), 'r');
        assert_eq!(MagicCode::MainExtended.to_char(), 'y');
        assert_eq!(MagicCode::Test.to_char(), 'x');
        assert_eq!(MagicCode::TestExtended.to_char(), '8');

        assert_eq!(MagicCode::from_char('r'), Some(MagicCode::Main));
        assert_eq!(MagicCode::from_char('y'), Some(MagicCode::MainExtended));
        assert_eq!(MagicCode::from_char('x'), Some(MagicCode::Test));
        assert_eq!(MagicCode::from_char('8'), Some(MagicCode::TestExtended));

        // In the charset but not a magic code.
        assert_eq!(MagicCode::from_char('q'), None);
        // Not in the charset at all.
        assert_eq!(MagicCode::from_char('b'), None);
    }

    #[test]
    fn network_hrp() {
        assert_eq!(MagicCode::Main.hrp(), "tx");
        assert_eq!(MagicCode::MainExtended.hrp(), "tx");
        assert_eq!(MagicCode::Test.hrp(), "txtest");
        assert_eq!(MagicCode::TestExtended.hrp(), "txtest");
    }

    #[test]
    fn extended_forms() {
        assert!(!MagicCode::Main.is_extended());
        assert!(MagicCode::MainExtended.is_extended());
        assert!(!MagicCode::Test.is_extended());
        assert!(MagicCode::TestExtended.is_extended());
    }
}
