#![forbid(unsafe_code)]
//! Resource generator for the ConsentUI master strings catalog.
//!
//! Reads one master JSON file mapping locale codes to consent-dialog text and
//! writes the platform resource files the mobile projects consume: Apple
//! `.lproj/Localizable.strings` bundles and Android `values*/strings.xml`
//! resources.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use consentgen::{MasterCatalog, Platform, generate};
//! use std::path::Path;
//!
//! let catalog = MasterCatalog::read_from("resources/consent_strings.json")?;
//! for platform in Platform::ALL {
//!     generate(platform, &catalog, Path::new("out"))?;
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Behavior
//!
//! - A locale listed in a platform table but absent from the catalog is
//!   skipped and reported; it never aborts the run.
//! - A catalog entry missing one of its four required fields is fatal at
//!   render time. No partial file is written for it.
//! - Regeneration is idempotent: identical input produces byte-identical
//!   output files.

pub mod catalog;
pub mod error;
pub mod formats;
pub mod generator;
pub mod platform;
pub mod traits;

// Re-export most used types for easy consumption
pub use crate::{
    catalog::{LocaleEntry, MasterCatalog, REQUIRED_FIELDS},
    error::Error,
    generator::{Outcome, generate, generate_locale},
    platform::{ANDROID_LOCALES, IOS_LOCALES, Platform},
};
