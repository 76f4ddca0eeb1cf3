//! Land Scout: turns land-search preferences into FSBO search links
//! for a fixed set of listing sites, plus a downloadable text summary.

pub mod composer;
pub mod config;
pub mod models;
pub mod platforms;
pub mod summary;

pub use composer::{build_platform_urls, compose, derive_search_terms, ComposedSearch};
pub use models::{Feature, Financing, LandType, SearchPreferences};
pub use platforms::Platform;
