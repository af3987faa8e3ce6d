//! Fetch npm package metadata and query its versions, dist-tags and
//! major version groups.
//!
//! ```no_run
//! # async fn run() -> Result<(), npm_package_info::RegistryError> {
//! use npm_package_info::PackageInfo;
//!
//! let package = PackageInfo::from_default_registry("lodash").await?;
//! let newest_v3 = package.latest_version_by_major(3);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod package;
pub mod registry;

pub use error::{LookupError, RegistryError};
pub use package::PackageInfo;
pub use registry::{Fetcher, HttpFetcher, NpmRegistry, RawResponse};
