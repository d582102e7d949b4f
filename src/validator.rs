//! String-in operations over identity card numbers.
//!
//! These functions accept unvalidated input and never panic. The boolean
//! checks collapse every failure to `false`; the rest return the typed
//! [`IdCodeError`]. Prefer parsing an [`IdCode`] once when several fields are
//! needed.

use chrono::{Local, NaiveDate};

use crate::domain::{self, legacy, Gender, IdCode, IdCodeError, Region, RegionLookup};

/// Returns `true` if `code` is a valid 18-character identity card number.
///
/// The code must be 18 characters with a 17-digit body, carry a real
/// birth date, and end with the matching check character (either case).
///
/// # Examples
///
/// ```
/// use identity_card::validate;
///
/// assert!(validate("11010519491231002X"));
/// assert!(validate("11010519491231002x"));
/// assert!(!validate("110105194912310021"));
/// ```
#[must_use]
pub fn validate(code: &str) -> bool {
    parse(code).is_ok()
}

/// Computes the check character for a 17-digit body.
///
/// # Errors
///
/// Returns [`IdCodeError::Length`] or [`IdCodeError::Format`] for a body that
/// is not exactly 17 digits.
pub fn compute_checksum(body: &str) -> Result<char, IdCodeError> {
    domain::compute_checksum(body)
}

/// Extracts the birth date of an 18-character code.
///
/// The checksum is not verified.
///
/// # Errors
///
/// Returns an error if the code is not 18 characters or the embedded date is
/// not a real calendar date.
pub fn birthday(code: &str) -> Result<NaiveDate, IdCodeError> {
    domain::birthday(code)
}

/// Reads the gender of an 18-character or legacy 15-character code.
///
/// # Errors
///
/// Returns an error for any other length, or a non-digit gender digit.
pub fn gender(code: &str) -> Result<Gender, IdCodeError> {
    domain::gender(code)
}

/// Converts a legacy 15-character code to 18-character form.
///
/// # Examples
///
/// ```
/// use identity_card::convert_15_to_18;
///
/// assert_eq!(convert_15_to_18("110105491231002").unwrap(), "11010519491231002X");
/// ```
///
/// # Errors
///
/// Returns an error if the code is not 15 digits.
pub fn convert_15_to_18(code: &str) -> Result<String, IdCodeError> {
    legacy::upgrade(code)
}

/// Returns `true` if `code` is valid and its holder meets `min_age` today.
///
/// See [`is_meet_age_on`].
#[must_use]
pub fn is_meet_age(code: &str, min_age: u32) -> bool {
    is_meet_age_on(code, min_age, today())
}

/// Returns `true` if `code` is valid and its holder meets `min_age` on
/// `today`.
///
/// The comparison is on the year and the `MMDD` value as plain integers, and
/// on the birthday itself the `min_age`-th year does not yet count. See
/// [`meets_min_age_on`](crate::domain::age::meets_min_age_on).
#[must_use]
pub fn is_meet_age_on(code: &str, min_age: u32, today: NaiveDate) -> bool {
    parse(code).is_ok_and(|code| code.meets_min_age_on(min_age, today))
}

/// Returns the age in whole years of the holder of `code` today.
///
/// # Errors
///
/// Returns an error if the code is invalid or the birth date is in the
/// future.
pub fn age(code: &str) -> Result<u32, IdCodeError> {
    age_on(code, today())
}

/// Returns the age in whole years of the holder of `code` on `today`.
///
/// See [`domain::age::age_on`] for the rounding rules.
///
/// # Errors
///
/// Returns an error if the code is invalid or `today` precedes the birth
/// date.
pub fn age_on(code: &str, today: NaiveDate) -> Result<u32, IdCodeError> {
    parse(code)?.age_on(today)
}

/// Looks up the issuing region of a valid code.
///
/// Returns `None` if the code is invalid or the lookup does not know the
/// region.
#[must_use]
pub fn lookup_region<L: RegionLookup + ?Sized>(code: &str, lookup: &L) -> Option<Region> {
    parse(code).ok()?.region(lookup)
}

fn parse(code: &str) -> Result<IdCode, IdCodeError> {
    IdCode::new(code).inspect_err(|e| tracing::debug!("Rejected identity card number: {e}"))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
