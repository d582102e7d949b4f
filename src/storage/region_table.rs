//! A region lookup backed by an in-memory table.
//!
//! Tables are usually loaded from a versioned TOML document:
//!
//! ```toml
//! _version = "1"
//!
//! [regions.110000]
//! province = "北京市"
//!
//! [regions.110105]
//! province = "北京市"
//! city = "市辖区"
//! district = "朝阳区"
//! ```

use std::{collections::BTreeMap, io, path::Path};

use serde::{Deserialize, Serialize};

use crate::domain::{Region, RegionCode, RegionLookup};

/// An in-memory table of region codes.
///
/// Lookups fall back from a district code to its city (`XXXX00`) and then its
/// province (`XX0000`) when the exact code is not present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct RegionTable {
    regions: BTreeMap<RegionCode, Region>,
}

impl RegionTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regions: BTreeMap::new(),
        }
    }

    /// Loads a table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or if its content is not a
    /// valid region table (including keys that are not six-digit codes).
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded {} regions from {}",
            table.regions.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parses a table from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not a valid region table.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        Ok(toml::from_str(content)?)
    }

    /// Saves the table to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be serialized or the file cannot
    /// be written.
    pub fn save(&self, path: &Path) -> Result<(), SaveError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Inserts or replaces the region for `code`.
    ///
    /// Returns the previous region, if any.
    pub fn insert(&mut self, code: RegionCode, region: Region) -> Option<Region> {
        self.regions.insert(code, region)
    }

    /// Returns the region stored under exactly `code`.
    #[must_use]
    pub fn get(&self, code: &RegionCode) -> Option<&Region> {
        self.regions.get(code)
    }

    /// Returns the number of codes in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns `true` if the table holds no codes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

impl RegionLookup for RegionTable {
    fn lookup(&self, code: &RegionCode) -> Option<Region> {
        self.get(code)
            .or_else(|| self.get(&code.city()))
            .or_else(|| self.get(&code.province()))
            .cloned()
    }
}

impl FromIterator<(RegionCode, Region)> for RegionTable {
    fn from_iter<I: IntoIterator<Item = (RegionCode, Region)>>(iter: I) -> Self {
        Self {
            regions: iter.into_iter().collect(),
        }
    }
}

/// Errors that can occur when loading a region table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read region table: {0}")]
    Io(#[from] io::Error),

    /// The content is not a valid region table.
    #[error("Failed to parse region table: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors that can occur when saving a region table.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The table could not be serialized.
    #[error("Failed to serialize region table: {0}")]
    Toml(#[from] toml::ser::Error),

    /// The file could not be written.
    #[error("Failed to write region table: {0}")]
    Io(#[from] io::Error),
}

/// The serialized versions of the table.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        regions: BTreeMap<RegionCode, Region>,
    },
}

impl From<Versions> for RegionTable {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 { regions } => Self { regions },
        }
    }
}

impl From<RegionTable> for Versions {
    fn from(table: RegionTable) -> Self {
        Self::V1 {
            regions: table.regions,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
_version = "1"

[regions.110000]
province = "北京市"

[regions.110100]
province = "北京市"
city = "市辖区"

[regions.110105]
province = "北京市"
city = "市辖区"
district = "朝阳区"
"#;

    fn code(s: &str) -> RegionCode {
        RegionCode::new(s).unwrap()
    }

    #[test]
    fn parses_sample() {
        let table = RegionTable::from_toml_str(SAMPLE).unwrap();
        assert_eq!(table.len(), 3);

        let region = table.lookup(&code("110105")).unwrap();
        assert_eq!(region.province, "北京市");
        assert_eq!(region.city.as_deref(), Some("市辖区"));
        assert_eq!(region.district.as_deref(), Some("朝阳区"));
    }

    #[test]
    fn lookup_falls_back_to_city_then_province() {
        let table = RegionTable::from_toml_str(SAMPLE).unwrap();

        let city = table.lookup(&code("110108")).unwrap();
        assert_eq!(city.city.as_deref(), Some("市辖区"));
        assert_eq!(city.district, None);

        let mut table = table;
        table.regions.remove(&code("110100"));
        let province = table.lookup(&code("110108")).unwrap();
        assert_eq!(province.province, "北京市");
        assert_eq!(province.city, None);

        assert!(table.lookup(&code("440524")).is_none());
    }

    #[test]
    fn invalid_key_is_rejected() {
        let content = "_version = \"1\"\n[regions.11010X]\nprovince = \"x\"\n";
        assert!(matches!(
            RegionTable::from_toml_str(content),
            Err(LoadError::Toml(_))
        ));
    }

    #[test]
    fn missing_version_is_rejected() {
        let content = "[regions.110000]\nprovince = \"北京市\"\n";
        assert!(RegionTable::from_toml_str(content).is_err());
    }

    #[test]
    fn version_only_is_empty() {
        let table = RegionTable::from_toml_str(r#"_version = "1""#).unwrap();
        assert_eq!(table, RegionTable::default());
        assert!(table.is_empty());
    }

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = RegionTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = RegionTable::load(&missing).unwrap_err();
        assert!(matches!(error, LoadError::Io(_)));
        assert!(error.to_string().starts_with("Failed to read region table:"));
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("regions.toml");

        let table: RegionTable = [(
            code("440524"),
            Region {
                province: "广东省".to_string(),
                city: Some("汕头市".to_string()),
                district: None,
            },
        )]
        .into_iter()
        .collect();

        table.save(&path).unwrap();
        assert_eq!(RegionTable::load(&path).unwrap(), table);
    }
}
