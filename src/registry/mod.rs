//! Registry access layer
//!
//! - [`fetcher`]: `Fetcher` trait and its reqwest-backed implementation
//! - [`npm`]: resolves package URLs and turns registry responses into `PackageInfo`

pub mod fetcher;
pub mod npm;

pub use fetcher::{Fetcher, HttpFetcher, RawResponse};
pub use npm::NpmRegistry;
