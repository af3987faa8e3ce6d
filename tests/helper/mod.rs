//! Shared helpers for integration tests

pub mod registry;

pub use registry::{StubFetcher, left_pad_document, mock_package};
