//! Check character computation per GB 11643-1999 (ISO 7064 MOD 11-2).

use super::id_code::{ensure_digits, ensure_length, Error};

/// Number of digits covered by the check character.
pub const BODY_LEN: usize = 17;

/// Positional weight applied to each body digit.
pub const WEIGHTS: [usize; BODY_LEN] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters, indexed by the weighted sum modulo 11.
pub const CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Computes the check character for a 17-digit body.
///
/// # Examples
///
/// ```
/// use identity_card::domain::checksum::compute_checksum;
///
/// assert_eq!(compute_checksum("11010519491231002"), Ok('X'));
/// ```
///
/// # Errors
///
/// Returns [`Error::Length`] if `body` is not 17 characters, or
/// [`Error::Format`] if any character is not a decimal digit.
pub fn compute_checksum(body: &str) -> Result<char, Error> {
    ensure_length(body, BODY_LEN, "17")?;
    ensure_digits(body, 0)?;
    Ok(check_char(body.as_bytes()))
}

/// Computes the check character over ASCII digits that are already known to
/// be valid.
pub(crate) fn check_char(body: &[u8]) -> char {
    let sum: usize = body
        .iter()
        .zip(WEIGHTS)
        .map(|(&digit, weight)| usize::from(digit - b'0') * weight)
        .sum();
    CODES[sum % 11]
}
