//! Output support for Apple `.strings` localization files.
//!
//! Renders one `Localizable.strings` file per locale from the master catalog.
//! Values are stored raw and escaped only when the file is rendered.

use std::fmt;

use indoc::indoc;

use crate::{
    catalog::{LocaleEntry, REQUIRED_FIELDS},
    error::Error,
    traits::Serializer,
};

/// Escape a raw value for a double-quoted `.strings` literal.
///
/// Backslash, double quote, and embedded newline are the only characters the
/// format cannot carry verbatim. The single character pass is equivalent to
/// replacing backslashes first, so the backslashes introduced for quotes and
/// newlines are never re-escaped.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out
}

/// Inverse of [`escape`].
///
/// Unrecognized escape pairs and a trailing lone backslash are passed through
/// verbatim rather than rejected.
pub fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// One `Localizable.strings` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// iOS locale token, used for the banner comment (e.g. "pt-BR").
    pub locale: String,
    /// All key-value pairs in file order.
    pub pairs: Vec<Pair>,
}

impl Format {
    pub fn new(locale: impl Into<String>, pairs: impl IntoIterator<Item = Pair>) -> Self {
        Format {
            locale: locale.into(),
            pairs: pairs.into_iter().collect(),
        }
    }

    /// Builds the file for one master catalog entry.
    ///
    /// `master_key` names the catalog entry in errors; `locale` is the iOS
    /// token that also names the `.lproj` folder. Fails with
    /// [`Error::MissingField`] on the first absent required field.
    pub fn from_entry(
        locale: impl Into<String>,
        master_key: &str,
        entry: &LocaleEntry,
    ) -> Result<Self, Error> {
        let pairs = REQUIRED_FIELDS
            .into_iter()
            .map(|field| {
                Ok(Pair {
                    key: format!("consent_{field}"),
                    value: entry.require(master_key, field)?.to_string(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Format::new(locale, pairs))
    }
}

impl Serializer for Format {
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut content = format!(
            indoc! {"
                /* ConsentUI Localized Strings - {} */

            "},
            self.locale
        );

        for pair in &self.pairs {
            content.push_str(&pair.to_string());
            content.push('\n');
        }

        writer.write_all(content.as_bytes()).map_err(Error::Io)
    }
}

/// A single key-value pair in a `.strings` file.
///
/// The value is raw text; [`escape`] is applied when the pair is formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub key: String,
    pub value: String,
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" = \"{}\";", self.key, escape(&self.value))
    }
}
