//! Core logic for seedscrub
//!
//! This crate contains:
//! - The URL sanitizer (pure text transform and in-place file rewrite)
//! - The per-run replacement report
//! - Error types

pub mod error;
pub mod sanitizer;

pub use error::{Result, SanitizeError};
pub use sanitizer::{DEFAULT_PLACEHOLDER, SanitizeReport, UrlSanitizer};
