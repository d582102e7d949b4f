/// Region tables loaded from TOML.
pub mod region_table;

pub use region_table::{LoadError, RegionTable, SaveError};
