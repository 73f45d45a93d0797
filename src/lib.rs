// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Bulk Email Extractor
//!
//! Pulls email addresses out of pasted free-form text, sorts them into
//! valid, invalid and duplicate buckets, and renders tier-dependent export
//! files.
//!
//! # Features
//!
//! - Loose scan plus anchored validation, so malformed addresses surface
//!   instead of being dropped
//! - Case-insensitive duplicate detection in first-seen order
//! - Free and Premium export projections (CSV, TXT, JSON)
//! - UI-independent login and registration form validation
//!
//! # Example
//!
//! ```rust
//! use mailmaster_extract::{FeatureTier, extract, project, upsell_signal};
//!
//! let result = extract("John@Example.com, jane@test.org, john@example.com");
//!
//! assert_eq!(result.valid, vec!["john@example.com", "jane@test.org"]);
//! assert_eq!(result.duplicates, vec!["john@example.com"]);
//! assert_eq!(project(&result, FeatureTier::Premium), vec!["jane@test.org"]);
//! assert!(upsell_signal(&result, FeatureTier::Free));
//! ```

mod config;
mod error;
mod export;
mod extractor;
mod forms;
mod types;

pub use config::Config;
pub use error::{ExtractError, Result};
pub use export::*;
pub use extractor::*;
pub use forms::*;
pub use types::*;
