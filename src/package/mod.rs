//! Package metadata layer
//!
//! - [`info`]: `PackageInfo`, built from a registry document, with version and dist-tag queries
//! - [`fields`]: allow-list of document keys copied into `PackageInfo`
//! - [`semver`]: version key parsing and ordering

pub mod fields;
pub mod info;
pub mod semver;

pub use fields::Field;
pub use info::{LATEST_DIST_TAG, PackageInfo};
