//! Shared test utilities for the eo-stac-bridge workspace.
//!
//! This crate provides common testing infrastructure:
//! - Canned upstream record fixtures
//! - An in-memory [`StaticCatalogue`] implementing `CatalogueClient`,
//!   with scripted upstream failures
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```

pub mod fixtures;
pub mod mock;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use mock::StaticCatalogue;
