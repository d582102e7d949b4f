//! Upgrade of first-generation 15-character codes.
//!
//! Legacy layout: `[0..6)` region, `[6..12)` birth date as `YYMMDD`,
//! `[12..15)` sequence. The century is implied and there is no check
//! character.

use super::{
    checksum::check_char,
    id_code::{ensure_digits, ensure_length, Error},
};

/// Number of characters in a legacy identity card number.
pub const LEGACY_LEN: usize = 15;

/// Sequence numbers reserved for holders born in the 1800s.
pub const CENTENARIAN_SEQUENCES: [&str; 4] = ["996", "997", "998", "999"];

/// Converts a 15-character code to its 18-character form.
///
/// The century `18` is inserted for centenarian sequences and `19` otherwise,
/// then the check character is appended. The birth date is not checked, so
/// the result may still fail [`IdCode::new`].
///
/// [`IdCode::new`]: super::IdCode::new
///
/// # Examples
///
/// ```
/// use identity_card::domain::legacy::upgrade;
///
/// assert_eq!(upgrade("110105491231002").unwrap(), "11010519491231002X");
/// ```
///
/// # Errors
///
/// Returns [`Error::Length`] if the code is not 15 characters, or
/// [`Error::Format`] if it contains non-digits.
pub fn upgrade(code: &str) -> Result<String, Error> {
    ensure_length(code, LEGACY_LEN, "15")?;
    ensure_digits(code, 0)?;

    let (region, rest) = code.split_at(6);
    let century = if CENTENARIAN_SEQUENCES.contains(&&code[12..]) {
        "18"
    } else {
        "19"
    };

    let mut upgraded = format!("{region}{century}{rest}");
    upgraded.push(check_char(upgraded.as_bytes()));
    Ok(upgraded)
}
