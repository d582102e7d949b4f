//! Domain model for resident identity card numbers.
//!
//! This module contains the validated [`IdCode`] type, the check character
//! algorithm, and the derived reads (birth date, gender, age, region).

/// Age arithmetic.
pub mod age;

mod birthday;
pub use birthday::birthday;

/// Check character computation.
pub mod checksum;
pub use checksum::compute_checksum;

mod gender;
pub use gender::{gender, Gender};

/// The validated identity card number type.
pub mod id_code;
pub use id_code::{Error as IdCodeError, IdCode};

/// Legacy 15-character codes.
pub mod legacy;

mod region;
pub use region::{Region, RegionCode, RegionLookup};
