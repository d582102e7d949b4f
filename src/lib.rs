//! Chinese Resident Identity Card Numbers
//!
//! Validation and decoding of 18-character identity card numbers per
//! GB 11643-1999, including the upgrade of legacy 15-character numbers.
//!
//! ```
//! use identity_card::{Gender, IdCode};
//!
//! let code: IdCode = "11010519491231002X".parse()?;
//! assert_eq!(code.gender(), Gender::Female);
//! # Ok::<(), identity_card::IdCodeError>(())
//! ```

pub mod domain;
pub use domain::{Gender, IdCode, IdCodeError, Region, RegionCode, RegionLookup};

/// Storage backends for region data.
pub mod storage;
pub use storage::RegionTable;

pub mod validator;
pub use validator::{
    age, age_on, birthday, compute_checksum, convert_15_to_18, gender, is_meet_age,
    is_meet_age_on, lookup_region, validate,
};
