use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    id_code::{Error, LEN},
    legacy::LEGACY_LEN,
};

/// Gender encoded by the parity of the last sequence digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Odd sequence digit.
    Male,
    /// Even sequence digit.
    Female,
}

impl Gender {
    /// Maps an ASCII decimal digit to a gender by parity.
    pub(crate) const fn from_ascii_digit(digit: u8) -> Self {
        if (digit - b'0') % 2 == 0 {
            Self::Female
        } else {
            Self::Male
        }
    }

    /// Returns the GB/T 2261.1 numeric code (`1` male, `2` female).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Male => 1,
            Self::Female => 2,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

/// Reads the gender digit from an 18-character or legacy 15-character code.
///
/// Only the gender digit is inspected; call [`IdCode::new`] first when the
/// rest of the code matters.
///
/// [`IdCode::new`]: super::IdCode::new
///
/// # Errors
///
/// Returns [`Error::Length`] for any other length, or [`Error::Format`] if
/// the digit at the gender offset is not a decimal digit.
pub fn gender(code: &str) -> Result<Gender, Error> {
    let offset = match code.chars().count() {
        LEN => 16,
        LEGACY_LEN => 14,
        actual => {
            return Err(Error::Length {
                expected: "15 or 18",
                actual,
            });
        }
    };

    let found = code.chars().nth(offset).unwrap_or_default();
    u8::try_from(found)
        .ok()
        .filter(u8::is_ascii_digit)
        .map(Gender::from_ascii_digit)
        .ok_or(Error::Format {
            position: offset,
            found,
        })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("11010519491231002X", Gender::Female; "worked example")]
    #[test_case("110105194912310011", Gender::Male; "odd eighteen")]
    #[test_case("110105491231002", Gender::Female; "even legacy")]
    #[test_case("110105491231001", Gender::Male; "odd legacy")]
    fn reads_parity_at_fixed_offset(code: &str, expected: Gender) {
        assert_eq!(gender(code), Ok(expected));
    }

    #[test_case(""; "empty")]
    #[test_case("1101054912310"; "thirteen")]
    #[test_case("1101051949123100"; "sixteen")]
    fn other_lengths_are_rejected(code: &str) {
        assert!(matches!(gender(code), Err(Error::Length { .. })));
    }

    #[test]
    fn non_digit_at_offset_is_rejected() {
        assert_eq!(
            gender("1101051949123100AX"),
            Err(Error::Format {
                position: 16,
                found: 'A'
            })
        );
    }

    #[test]
    fn numeric_codes() {
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Female.code(), 2);
    }

    #[test]
    fn serialises_lowercase() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"male\"");
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
