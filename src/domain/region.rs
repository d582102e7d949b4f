use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::id_code::{ensure_digits, ensure_length, Error};

/// Six-digit administrative division code, as found at the start of an
/// identity card number.
///
/// The first two digits identify the province, the next two the city and the
/// last two the district.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    /// Parses a six-digit region code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Length`] if the code is not six characters, or
    /// [`Error::Format`] if it contains non-digits.
    pub fn new(code: &str) -> Result<Self, Error> {
        ensure_length(code, 6, "6")?;
        ensure_digits(code, 0)?;
        Ok(Self(code.to_string()))
    }

    pub(crate) fn from_validated(code: &str) -> Self {
        Self(code.to_string())
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the code of the enclosing city (`XXXX00`).
    #[must_use]
    pub fn city(&self) -> Self {
        Self(format!("{}00", &self.0[..4]))
    }

    /// Returns the code of the enclosing province (`XX0000`).
    #[must_use]
    pub fn province(&self) -> Self {
        Self(format!("{}0000", &self.0[..2]))
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

/// Names of an administrative division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Province, autonomous region or municipality.
    pub province: String,

    /// Prefecture-level city, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// County-level district, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
}

/// Resolves region codes to names.
///
/// The crate ships no region data. Implement this over whatever source is
/// available, or use [`RegionTable`](crate::storage::RegionTable).
pub trait RegionLookup {
    /// Returns the region for `code`, or `None` if it is unknown.
    fn lookup(&self, code: &RegionCode) -> Option<Region>;
}

impl<T: RegionLookup + ?Sized> RegionLookup for &T {
    fn lookup(&self, code: &RegionCode) -> Option<Region> {
        (**self).lookup(code)
    }
}
