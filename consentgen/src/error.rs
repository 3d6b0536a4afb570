//! All error types for the consentgen crate.
//!
//! These are returned from all fallible operations (catalog loading, rendering, generation).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("locale `{locale}` is missing required field `{field}`")]
    MissingField { locale: String, field: &'static str },

    #[error("unknown platform `{0}`")]
    UnknownPlatform(String),
}

impl Error {
    /// Creates a missing-field error for one locale entry.
    pub fn missing_field(locale: impl Into<String>, field: &'static str) -> Self {
        Error::MissingField {
            locale: locale.into(),
            field,
        }
    }
}
