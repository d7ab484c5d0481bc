// SPDX-License-Identifier: CC0-1.0

//! Display formatting of txref strings.
//!
//! Txrefs are shown with a colon after the bech32 separator and a hyphen
//! after every four data characters, e.g. `tx1:rjk0-uqay-z9l7-m9m`. The
//! separators carry no information: [`strip_unknown_chars`] removes them
//! (and any other noise) to recover the raw string.

use alloc::string::String;

use crate::error::FormatError;
use crate::limits::MAX_HRP_LENGTH;

/// The 32 characters of the bech32 alphabet.
const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Removes every character that cannot appear in an encoded txref.
///
/// Keeps `1` (the bech32 separator) and the lowercase alphabet; drops
/// hyphens, colons, whitespace, uppercase and anything else. This is the
/// first step of decoding and the inverse of the display formatting.
pub fn strip_unknown_chars(s: &str) -> String {
    s.chars().filter(|&c| c == '1' || CHARSET.contains(c)).collect()
}

/// Formats `plain` for display: a colon after the human-readable part and
/// its `1` separator, then a hyphen after every four data characters.
///
/// `hrp_len` is the length of the human-readable part in characters, not
/// counting the `1`.
///
/// # Errors
///
/// If the human-readable part (plus the two separators this function
/// inserts and counts as part of it) exceeds [`MAX_HRP_LENGTH`], or
/// `plain` is too short to contain the human-readable part at all.
pub fn pretty_print(plain: &str, hrp_len: usize) -> Result<String, FormatError> {
    if hrp_len > MAX_HRP_LENGTH {
        return Err(FormatError::HrpTooLong(hrp_len));
    }
    let len = plain.chars().count();
    if len < hrp_len + 1 {
        return Err(FormatError::HrpLongerThanInput { hrp_len, len });
    }

    let mut with_colon = String::with_capacity(plain.len() + 1);
    for (i, c) in plain.chars().enumerate() {
        with_colon.push(c);
        if i + 1 == hrp_len + 1 {
            with_colon.push(':');
        }
    }
    add_group_separators(&with_colon, hrp_len + 2, 4)
}

/// Inserts a hyphen after every `spacing` characters past the first
/// `hrp_len`, never as the final character.
///
/// # Errors
///
/// If `hrp_len` exceeds [`MAX_HRP_LENGTH`], `spacing` is zero, `raw` has
/// fewer than two characters, or `raw` is shorter than `hrp_len`.
pub fn add_group_separators(
    raw: &str,
    hrp_len: usize,
    spacing: usize,
) -> Result<String, FormatError> {
    if hrp_len > MAX_HRP_LENGTH {
        return Err(FormatError::HrpTooLong(hrp_len));
    }
    if spacing == 0 {
        return Err(FormatError::ZeroSpacing);
    }

    let len = raw.chars().count();
    if len < 2 {
        return Err(FormatError::TooShort(len));
    }
    if len == hrp_len {
        return Ok(String::from(raw));
    }
    if len < hrp_len {
        return Err(FormatError::HrpLongerThanInput { hrp_len, len });
    }

    let mut output = String::with_capacity(raw.len() + (len - hrp_len - 1) / spacing);
    for (i, c) in raw.chars().enumerate() {
        output.push(c);
        let pos = i + 1;
        if pos > hrp_len && pos < len && (pos - hrp_len) % spacing == 0 {
            output.push('-');
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting_and_noise() {
        assert_eq!(strip_unknown_chars("tx1:rjk0-uqay-z9l7-m9m"), "tx1rjk0uqayz9l7m9m");
        assert_eq!(strip_unknown_chars("tx1 rjk0 uqay z9l7 m9m"), "tx1rjk0uqayz9l7m9m");
        assert_eq!(strip_unknown_chars("tx1!rjk0_uqay*z9l7^m9m"), "tx1rjk0uqayz9l7m9m");
        // Uppercase is not part of the alphabet and is dropped too.
        assert_eq!(strip_unknown_chars("TX1RJK0"), "10");
        assert_eq!(strip_unknown_chars(""), "");
    }

    #[test]
    fn pretty_prints_a_mainnet_txref() {
        assert_eq!(pretty_print("tx1rqqqqqqqqwtvvjr", 2).unwrap(), "tx1:rqqq-qqqq-qwtv-vjr");
        assert_eq!(pretty_print("tx1rjk0uqayz9l7m9m", 2).unwrap(), "tx1:rjk0-uqay-z9l7-m9m");
    }

    #[test]
    fn pretty_prints_a_testnet_txref() {
        assert_eq!(
            pretty_print("txtest1xjk0uqayzghlp89", 6).unwrap(),
            "txtest1:xjk0-uqay-zghl-p89"
        );
        assert_eq!(
            pretty_print("txtest18jk0uqayzu4xgj9m8a", 6).unwrap(),
            "txtest1:8jk0-uqay-zu4x-gj9m-8a"
        );
    }

    #[test]
    fn stripping_inverts_pretty_printing() {
        let pretty = pretty_print("tx1yjk0uqayzu4xx22sy6", 2).unwrap();
        assert_eq!(pretty, "tx1:yjk0-uqay-zu4x-x22s-y6");
        assert_eq!(strip_unknown_chars(&pretty), "tx1yjk0uqayzu4xx22sy6");
    }

    #[test]
    fn never_emits_a_trailing_separator() {
        // Exactly four data characters: the hyphen slot lands on the final
        // character and is suppressed.
        assert_eq!(add_group_separators("tx1qqqq", 3, 4).unwrap(), "tx1qqqq");
        assert_eq!(add_group_separators("tx1qqqqq", 3, 4).unwrap(), "tx1qqqq-q");
    }

    #[test]
    fn spacing_is_configurable() {
        assert_eq!(add_group_separators("tx1qqqqq", 3, 1).unwrap(), "tx1q-q-q-q-q");
        assert_eq!(add_group_separators("tx1qqqqq", 3, 2).unwrap(), "tx1qq-qq-q");
    }

    #[test]
    fn whole_string_may_be_the_hrp() {
        assert_eq!(add_group_separators("tx", 2, 4).unwrap(), "tx");
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(matches!(
            add_group_separators("tx1qqqq", 84, 4),
            Err(FormatError::HrpTooLong(84))
        ));
        assert!(matches!(add_group_separators("tx1qqqq", 3, 0), Err(FormatError::ZeroSpacing)));
        assert!(matches!(add_group_separators("t", 1, 4), Err(FormatError::TooShort(1))));
        assert!(matches!(
            add_group_separators("tx1", 6, 4),
            Err(FormatError::HrpLongerThanInput { hrp_len: 6, len: 3 })
        ));
        assert!(matches!(
            pretty_print("tx", 6),
            Err(FormatError::HrpLongerThanInput { hrp_len: 6, len: 2 })
        ));
    }
}
