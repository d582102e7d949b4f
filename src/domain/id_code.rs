use std::{fmt, ops::Deref, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{
    age,
    birthday::from_yyyymmdd,
    checksum::{self, BODY_LEN},
    gender::Gender,
    legacy,
    region::{Region, RegionCode, RegionLookup},
};

/// Number of characters in a current-format identity card number.
pub const LEN: usize = 18;

/// A validated 18-character resident identity card number.
///
/// Layout:
/// - `[0..6)` region code
/// - `[6..14)` birth date as `YYYYMMDD`
/// - `[14..17)` sequence number; the last digit encodes gender
/// - `[17]` check character (`0-9` or `X`)
///
/// An `IdCode` can only be obtained by parsing, so every value carries a
/// digit body, a real calendar birth date and a matching check character.
/// The check character is stored uppercased.
///
/// # Examples
///
/// ```
/// use identity_card::{Gender, IdCode};
///
/// let code: IdCode = "11010519491231002x".parse().unwrap();
///
/// assert_eq!(code.as_str(), "11010519491231002X");
/// assert_eq!(code.region_code().as_str(), "110105");
/// assert_eq!(code.birthday().to_string(), "1949-12-31");
/// assert_eq!(code.gender(), Gender::Female);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct IdCode {
    code: String,
    birthday: NaiveDate,
}

impl IdCode {
    /// Parses and validates an 18-character code.
    ///
    /// The check character is compared case-insensitively.
    ///
    /// # Errors
    ///
    /// - [`Error::Length`] if the code is not exactly 18 characters
    /// - [`Error::Format`] if the first 17 characters are not all digits
    /// - [`Error::InvalidDate`] if the embedded birth date is not a real date
    /// - [`Error::ChecksumMismatch`] if the check character is wrong
    pub fn new(code: &str) -> Result<Self, Error> {
        ensure_length(code, LEN, "18")?;

        let body = &code[..BODY_LEN];
        ensure_digits(body, 0)?;

        let birthday = from_yyyymmdd(&code[6..14])?;

        let expected = checksum::check_char(body.as_bytes());
        let actual = char::from(code.as_bytes()[BODY_LEN]).to_ascii_uppercase();
        if expected != actual {
            return Err(Error::ChecksumMismatch { expected, actual });
        }

        Ok(Self {
            code: format!("{body}{expected}"),
            birthday,
        })
    }

    /// Upgrades a legacy 15-character code and validates the result.
    ///
    /// # Errors
    ///
    /// Returns any error from [`legacy::upgrade`], or from [`IdCode::new`] if
    /// the upgraded code does not carry a real birth date.
    pub fn from_legacy(code: &str) -> Result<Self, Error> {
        Self::new(&legacy::upgrade(code)?)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Returns the 17-digit body, without the check character.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.code[..BODY_LEN]
    }

    /// Returns the check character.
    #[must_use]
    pub fn check_char(&self) -> char {
        char::from(self.code.as_bytes()[BODY_LEN])
    }

    /// Returns the administrative region code (first six digits).
    #[must_use]
    pub fn region_code(&self) -> RegionCode {
        RegionCode::from_validated(&self.code[..6])
    }

    /// Returns the embedded birth date.
    #[must_use]
    pub const fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// Returns the three-digit sequence number.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.code[14..BODY_LEN]
    }

    /// Returns the gender encoded by the parity of the last sequence digit.
    #[must_use]
    pub fn gender(&self) -> Gender {
        Gender::from_ascii_digit(self.code.as_bytes()[16])
    }

    /// Returns the holder's age in whole years on the given date.
    ///
    /// See [`age::age_on`] for the rounding rules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BornAfter`] if `today` precedes the birth date.
    pub fn age_on(&self, today: NaiveDate) -> Result<u32, Error> {
        age::age_on(self.birthday, today)
    }

    /// Returns whether the holder meets `min_age` on the given date.
    ///
    /// See [`age::meets_min_age_on`].
    #[must_use]
    pub fn meets_min_age_on(&self, min_age: u32, today: NaiveDate) -> bool {
        age::meets_min_age_on(self.birthday, min_age, today)
    }

    /// Looks up the issuing region through the given lookup.
    #[must_use]
    pub fn region<L: RegionLookup + ?Sized>(&self, lookup: &L) -> Option<Region> {
        lookup.lookup(&self.region_code())
    }
}

impl fmt::Display for IdCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.code)
    }
}

impl AsRef<str> for IdCode {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl Deref for IdCode {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.code
    }
}

impl FromStr for IdCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for IdCode {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for IdCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<IdCode> for String {
    fn from(code: IdCode) -> Self {
        code.code
    }
}

/// Errors that can occur while validating or decoding an identity card number.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The input does not have the length the operation requires.
    #[error("Invalid length: expected {expected} characters, got {actual}")]
    Length {
        /// The accepted length(s), e.g. `"18"` or `"15 or 18"`.
        expected: &'static str,
        /// The number of characters supplied.
        actual: usize,
    },

    /// A character that must be a decimal digit is something else.
    ///
    /// Only the offending character is kept, never the surrounding code.
    #[error("Invalid format: expected a decimal digit at position {position}, found '{found}'")]
    Format {
        /// Zero-based character position within the code.
        position: usize,
        /// The character found there.
        found: char,
    },

    /// The embedded birth date is not a real calendar date.
    #[error("Invalid birth date: {0}")]
    InvalidDate(String),

    /// The supplied check character does not match the computed one.
    #[error("Checksum mismatch: expected '{expected}', got '{actual}'")]
    ChecksumMismatch {
        /// The check character computed from the body.
        expected: char,
        /// The check character found in the input.
        actual: char,
    },

    /// An age was requested for a date before the holder was born.
    #[error("Birth date {birthday} is after {today}")]
    BornAfter {
        /// The holder's birth date.
        birthday: NaiveDate,
        /// The reference date.
        today: NaiveDate,
    },
}

/// Checks that `s` is exactly `expected` ASCII characters.
///
/// Once this passes, byte offsets into `s` are character offsets.
pub(crate) fn ensure_length(s: &str, expected: usize, label: &'static str) -> Result<(), Error> {
    let actual = s.chars().count();
    if actual != expected {
        return Err(Error::Length {
            expected: label,
            actual,
        });
    }
    match s.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        Some((position, found)) => Err(Error::Format { position, found }),
        None => Ok(()),
    }
}

/// Checks that every character of `s` is a decimal digit.
///
/// `offset` is the position of `s` within the whole code, so errors point
/// into the code rather than the segment.
pub(crate) fn ensure_digits(s: &str, offset: usize) -> Result<(), Error> {
    match s.chars().enumerate().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, found)) => Err(Error::Format {
            position: offset + position,
            found,
        }),
        None => Ok(()),
    }
}
