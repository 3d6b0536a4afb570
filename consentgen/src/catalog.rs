//! The master consent-strings catalog.
//!
//! The catalog is the single source of truth: one JSON object keyed by locale
//! code, each value carrying the four consent-dialog text fields. It is loaded
//! once per run and never mutated afterwards.

use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::error::Error;

/// The four text fields every complete locale entry carries.
pub const REQUIRED_FIELDS: [&str; 4] = ["title", "message", "allow", "decline"];

/// Consent-dialog text for one locale.
///
/// Fields are optional on purpose: the catalog is not schema-validated at
/// load time. Absence only surfaces through [`LocaleEntry::require`] when a
/// generator actually renders the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decline: Option<String>,
}

impl LocaleEntry {
    /// Looks up a field by its catalog name.
    ///
    /// Returns `None` both for an absent field and for a name outside
    /// [`REQUIRED_FIELDS`].
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "title" => self.title.as_deref(),
            "message" => self.message.as_deref(),
            "allow" => self.allow.as_deref(),
            "decline" => self.decline.as_deref(),
            _ => None,
        }
    }

    /// Looks up a required field, failing with [`Error::MissingField`] if the
    /// master entry does not carry it.
    pub fn require(&self, locale: &str, name: &'static str) -> Result<&str, Error> {
        self.field(name)
            .ok_or_else(|| Error::missing_field(locale, name))
    }

    /// Names of required fields this entry does not carry.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|name| self.field(name).is_none())
            .collect()
    }

    /// True if all four required fields are present.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Mapping from locale code (e.g. "en", "zh-Hans") to [`LocaleEntry`].
///
/// Keys are sorted, so reporting derived from the catalog is deterministic
/// across reruns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MasterCatalog(BTreeMap<String, LocaleEntry>);

impl MasterCatalog {
    /// Parse from any reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Parse from file path.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path).map_err(Error::Io)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parse from a string.
    pub fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(s))
    }

    pub fn get(&self, locale: &str) -> Option<&LocaleEntry> {
        self.0.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.0.contains_key(locale)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All locale codes in the catalog, in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// All `(locale, entry)` pairs, in sorted key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &LocaleEntry)> {
        self.0.iter().map(|(code, entry)| (code.as_str(), entry))
    }

    /// Catalog keys that do not parse as BCP 47 language identifiers.
    ///
    /// A malformed key is never fatal; the platform tables simply will not
    /// reference it. This check exists for the validate-only path.
    pub fn malformed_locales(&self) -> Vec<&str> {
        self.locales()
            .filter(|code| code.parse::<LanguageIdentifier>().is_err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_catalog() {
        let json = r#"{
            "en": {
                "title": "Privacy Consent",
                "message": "We use your data.",
                "allow": "Allow",
                "decline": "Decline"
            }
        }"#;
        let catalog = MasterCatalog::from_str(json).unwrap();
        assert_eq!(catalog.len(), 1);
        let en = catalog.get("en").unwrap();
        assert_eq!(en.title.as_deref(), Some("Privacy Consent"));
        assert_eq!(en.decline.as_deref(), Some("Decline"));
        assert!(en.is_complete());
    }

    #[test]
    fn test_missing_field_surfaces_at_point_of_use() {
        // No schema validation at load time: the entry parses fine.
        let json = r#"{ "fr": { "title": "Consentement", "message": "...", "decline": "Refuser" } }"#;
        let catalog = MasterCatalog::from_str(json).unwrap();
        let fr = catalog.get("fr").unwrap();

        assert_eq!(fr.missing_fields(), vec!["allow"]);
        assert!(!fr.is_complete());

        let err = fr.require("fr", "allow").unwrap_err();
        assert_eq!(
            err.to_string(),
            "locale `fr` is missing required field `allow`"
        );
        // Present fields still resolve.
        assert_eq!(fr.require("fr", "title").unwrap(), "Consentement");
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let json = r#"{
            "en": {
                "title": "T", "message": "M", "allow": "A", "decline": "D",
                "translator_note": "do not ship"
            }
        }"#;
        let catalog = MasterCatalog::from_str(json).unwrap();
        assert!(catalog.get("en").unwrap().is_complete());
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = MasterCatalog::from_str("{ not json");
        assert!(matches!(result.unwrap_err(), Error::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = MasterCatalog::read_from("no/such/consent_strings.json");
        assert!(matches!(result.unwrap_err(), Error::Io(_)));
    }

    #[test]
    fn test_locales_are_sorted() {
        let json = r#"{
            "ko": { "title": "t", "message": "m", "allow": "a", "decline": "d" },
            "de": { "title": "t", "message": "m", "allow": "a", "decline": "d" },
            "en": { "title": "t", "message": "m", "allow": "a", "decline": "d" }
        }"#;
        let catalog = MasterCatalog::from_str(json).unwrap();
        let locales: Vec<_> = catalog.locales().collect();
        assert_eq!(locales, vec!["de", "en", "ko"]);
    }

    #[test]
    fn test_malformed_locales() {
        let json = r#"{
            "en": { "title": "t", "message": "m", "allow": "a", "decline": "d" },
            "zh-Hans": { "title": "t", "message": "m", "allow": "a", "decline": "d" },
            "not a locale!": { "title": "t", "message": "m", "allow": "a", "decline": "d" }
        }"#;
        let catalog = MasterCatalog::from_str(json).unwrap();
        assert_eq!(catalog.malformed_locales(), vec!["not a locale!"]);
    }
}
