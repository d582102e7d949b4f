use chrono::NaiveDate;

use super::id_code::{ensure_digits, ensure_length, Error, LEN};

const CANONICAL_FORMAT: &str = "%Y-%m-%d";

/// Position of the `YYYYMMDD` segment within an 18-character code.
const DATE_START: usize = 6;

/// Extracts the birth date from an 18-character code.
///
/// Only the date segment is inspected; the checksum is not verified.
///
/// # Errors
///
/// - [`Error::Length`] if the code is not 18 characters
/// - [`Error::Format`] if the date segment contains non-digits
/// - [`Error::InvalidDate`] if the segment is not a real calendar date
pub fn birthday(code: &str) -> Result<NaiveDate, Error> {
    ensure_length(code, LEN, "18")?;
    from_yyyymmdd(&code[DATE_START..DATE_START + 8])
}

/// Parses an 8-digit `YYYYMMDD` segment strictly.
///
/// The parsed date must render back to exactly the same `YYYY-MM-DD` text, so
/// out-of-range fields are rejected rather than rolled over.
pub(crate) fn from_yyyymmdd(segment: &str) -> Result<NaiveDate, Error> {
    ensure_length(segment, 8, "8")?;
    ensure_digits(segment, DATE_START)?;

    let text = format!("{}-{}-{}", &segment[..4], &segment[4..6], &segment[6..]);
    let date = NaiveDate::parse_from_str(&text, CANONICAL_FORMAT)
        .map_err(|_| Error::InvalidDate(text.clone()))?;

    if date.format(CANONICAL_FORMAT).to_string() == text {
        Ok(date)
    } else {
        Err(Error::InvalidDate(text))
    }
}
