// SPDX-License-Identifier: CC0-1.0

//! Error types for the `txref` crate.

use core::fmt;

use internals::write_err;

use crate::magic::MagicCode;

/// Error returned when a numeric field does not fit the bits allocated to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    pub(crate) field: Field,
    pub(crate) value: u32,
}

/// The payload field a [`RangeError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    BlockHeight,
    Position,
    TxoIndex,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::BlockHeight => "block height",
            Field::Position => "transaction position",
            Field::TxoIndex => "txo index",
        }
    }

    fn max(self) -> u32 {
        match self {
            Field::BlockHeight => 0xFF_FFFF,
            Field::Position | Field::TxoIndex => 0x7FFF,
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} is too large, the maximum is {}",
            self.field.name(),
            self.value,
            self.field.max()
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

/// Error returned when a magic code does not fit where it is used.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UnsupportedVariantError {
    /// The 5-bit value is not one of the four assigned magic codes.
    UnknownMagic(u8),
    /// The standard encoding was requested with a magic code of the extended form.
    NotStandard(MagicCode),
    /// The extended encoding was requested with a magic code of the standard form.
    NotExtended(MagicCode),
}

impl fmt::Display for UnsupportedVariantError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use UnsupportedVariantError::*;

        match *self {
            UnknownMagic(value) => write!(f, "unknown magic code {}", value),
            NotStandard(magic) => write!(f, "magic code {} encodes extended txrefs", magic),
            NotExtended(magic) => write!(f, "magic code {} does not encode extended txrefs", magic),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedVariantError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use UnsupportedVariantError::*;

        match *self {
            UnknownMagic(_) | NotStandard(_) | NotExtended(_) => None,
        }
    }
}

/// Error returned when the version bit holds a value this crate does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedVersionError(pub(crate) u8);

impl fmt::Display for UnsupportedVersionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown txref version {}", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for UnsupportedVersionError {}

/// Error returned when the data part is not a valid txref payload size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPayloadSizeError(pub(crate) usize);

impl fmt::Display for InvalidPayloadSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "payload is {} symbols long, expected 9 or 12", self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPayloadSizeError {}

/// Error returned when neither checksum algorithm validates a string.
///
/// Wraps the failure of the bech32m attempt, the algorithm encoders are
/// expected to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecksumError(pub(crate) bech32::primitives::decode::CheckedHrpstringError);

impl fmt::Display for ChecksumError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_err!(f, "checksum verification failed"; self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChecksumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.0) }
}

/// Error returned when a string cannot be laid out for display.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FormatError {
    /// The human-readable part is longer than bech32 permits.
    HrpTooLong(usize),
    /// The separator spacing was zero.
    ZeroSpacing,
    /// The string is too short to carry any formatting.
    TooShort(usize),
    /// The string is shorter than the human-readable part it claims to carry.
    HrpLongerThanInput {
        /// Length of the claimed human-readable part, in characters.
        hrp_len: usize,
        /// Length of the string, in characters.
        len: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use FormatError::*;

        match *self {
            HrpTooLong(len) =>
                write!(f, "human-readable part of {} characters exceeds the limit of 83", len),
            ZeroSpacing => write!(f, "separator spacing must be at least 1"),
            TooShort(len) => write!(f, "string of {} characters is too short to format", len),
            HrpLongerThanInput { hrp_len, len } => write!(
                f,
                "human-readable part of {} characters does not fit in a string of {}",
                hrp_len, len
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use FormatError::*;

        match *self {
            HrpTooLong(_) | ZeroSpacing | TooShort(_) | HrpLongerThanInput { .. } => None,
        }
    }
}

/// Error returned when a caller-supplied human-readable part is not valid bech32.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidHrpError(pub(crate) bech32::primitives::hrp::Error);

impl fmt::Display for InvalidHrpError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_err!(f, "invalid human-readable part"; self.0)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidHrpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> { Some(&self.0) }
}

/// Error returned when encoding a txref fails.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EncodeError {
    /// The caller-supplied human-readable part was rejected.
    Hrp(InvalidHrpError),
    /// The magic code does not fit the requested encoding.
    UnsupportedVariant(UnsupportedVariantError),
    /// The encoded string could not be laid out for display.
    Format(FormatError),
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use EncodeError::*;

        match *self {
            Hrp(ref e) => write_err!(f, "human-readable part is unusable"; e),
            UnsupportedVariant(ref e) => write_err!(f, "unsupported txref variant"; e),
            Format(ref e) => write_err!(f, "cannot format the encoded string"; e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use EncodeError::*;

        match *self {
            Hrp(ref e) => Some(e),
            UnsupportedVariant(ref e) => Some(e),
            Format(ref e) => Some(e),
        }
    }
}

impl From<InvalidHrpError> for EncodeError {
    fn from(e: InvalidHrpError) -> Self { Self::Hrp(e) }
}

impl From<UnsupportedVariantError> for EncodeError {
    fn from(e: UnsupportedVariantError) -> Self { Self::UnsupportedVariant(e) }
}

impl From<FormatError> for EncodeError {
    fn from(e: FormatError) -> Self { Self::Format(e) }
}

/// Error returned when decoding a txref fails.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DecodeError {
    /// Neither checksum algorithm validated the string.
    Checksum(ChecksumError),
    /// The data part is not a valid txref payload size.
    PayloadSize(InvalidPayloadSizeError),
    /// The magic code is not assigned.
    UnsupportedVariant(UnsupportedVariantError),
    /// The version bit holds a value this crate does not know.
    UnsupportedVersion(UnsupportedVersionError),
    /// The decoded string could not be laid out for display.
    Format(FormatError),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DecodeError::*;

        match *self {
            Checksum(ref e) => write_err!(f, "bech32 decoding failed"; e),
            PayloadSize(ref e) => write_err!(f, "invalid payload"; e),
            UnsupportedVariant(ref e) => write_err!(f, "unsupported txref variant"; e),
            UnsupportedVersion(ref e) => write_err!(f, "unsupported txref version"; e),
            Format(ref e) => write_err!(f, "cannot format the decoded string"; e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use DecodeError::*;

        match *self {
            Checksum(ref e) => Some(e),
            PayloadSize(ref e) => Some(e),
            UnsupportedVariant(ref e) => Some(e),
            UnsupportedVersion(ref e) => Some(e),
            Format(ref e) => Some(e),
        }
    }
}

impl From<ChecksumError> for DecodeError {
    fn from(e: ChecksumError) -> Self { Self::Checksum(e) }
}

impl From<InvalidPayloadSizeError> for DecodeError {
    fn from(e: InvalidPayloadSizeError) -> Self { Self::PayloadSize(e) }
}

impl From<UnsupportedVariantError> for DecodeError {
    fn from(e: UnsupportedVariantError) -> Self { Self::UnsupportedVariant(e) }
}

impl From<UnsupportedVersionError> for DecodeError {
    fn from(e: UnsupportedVersionError) -> Self { Self::UnsupportedVersion(e) }
}

impl From<FormatError> for DecodeError {
    fn from(e: FormatError) -> Self { Self::Format(e) }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use super::*;

    #[test]
    fn range_error_names_the_field() {
        let err = RangeError { field: Field::BlockHeight, value: 16_777_216 };
        assert_eq!(
            format!("{}", err),
            "block height 16777216 is too large, the maximum is 16777215"
        );

        let err = RangeError { field: Field::TxoIndex, value: 32_768 };
        assert_eq!(format!("{}", err), "txo index 32768 is too large, the maximum is 32767");
    }

    #[test]
    fn unsupported_variant_display() {
        let err = UnsupportedVariantError::UnknownMagic(11);
        assert_eq!(format!("{}", err), "unknown magic code 11");

        let err = UnsupportedVariantError::NotStandard(MagicCode::MainExtended);
        assert_eq!(format!("{}", err), "magic code 4 encodes extended txrefs");
    }
}
