// SPDX-License-Identifier: CC0-1.0

//! Published length limits of txref strings.
//!
//! The classifier's length tables are built from these values; they are
//! also what callers need when sizing input buffers.

/// The longest string [`crate::decode`] can hand back: a pretty-printed
/// testnet extended txref (`txtest` + `1` + colon + 18 data characters +
/// 4 hyphens).
pub const MAX_LENGTH: usize = 30;

/// The longest human-readable part bech32 permits.
pub const MAX_HRP_LENGTH: usize = 83;

/// Length of a mainnet standard txref with its human-readable part,
/// before display formatting.
pub const MIN_LENGTH_MAINNET: usize = 18;

/// Length of a testnet standard txref with its human-readable part,
/// before display formatting.
pub const MIN_LENGTH_TESTNET: usize = 22;

/// Length of a mainnet extended txref with its human-readable part,
/// before display formatting.
pub const MIN_EXTENDED_LENGTH_MAINNET: usize = 21;

/// Length of a testnet extended txref with its human-readable part,
/// before display formatting.
pub const MIN_EXTENDED_LENGTH_TESTNET: usize = 25;

/// Length of a standard txref whose human-readable part was stripped.
pub const MIN_LENGTH_NO_HRP: usize = 15;

/// Length of an extended txref whose human-readable part was stripped.
///
/// Collides with [`MIN_LENGTH_MAINNET`]; the classifier resolves the
/// ambiguity by looking for the literal `tx1` prefix.
pub const MIN_EXTENDED_LENGTH_NO_HRP: usize = 18;
