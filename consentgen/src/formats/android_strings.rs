//! Output support for Android `strings.xml` localization files.
//!
//! Renders one `strings.xml` per locale from the master catalog. Values are
//! stored raw; the Android escape is applied while writing and the result is
//! emitted with `BytesText::from_escaped` so the XML writer does not touch it
//! again.

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{
    catalog::{LocaleEntry, REQUIRED_FIELDS},
    error::Error,
    traits::Serializer,
};

/// Escape a raw value for an Android `<string>` element body.
///
/// Markup characters become entities and quote/apostrophe get the Android
/// resource backslash escape. The single character pass replaces each input
/// character exactly once, so the ampersands introduced by `&amp;`/`&lt;`/
/// `&gt;` are never revisited.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            _ => out.push(c),
        }
    }
    out
}

/// One `strings.xml` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    /// All `<string>` resources in file order.
    pub strings: Vec<StringResource>,
}

impl Format {
    pub fn new(strings: impl IntoIterator<Item = StringResource>) -> Self {
        Format {
            strings: strings.into_iter().collect(),
        }
    }

    /// Builds the file for one master catalog entry.
    ///
    /// Fails with [`Error::MissingField`] on the first absent required field.
    pub fn from_entry(master_key: &str, entry: &LocaleEntry) -> Result<Self, Error> {
        let strings = REQUIRED_FIELDS
            .into_iter()
            .map(|field| {
                Ok(StringResource {
                    name: format!("consent_{field}"),
                    value: entry.require(master_key, field)?.to_string(),
                })
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Format::new(strings))
    }
}

impl Serializer for Format {
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        let mut xml_writer = Writer::new(&mut writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml_writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        xml_writer.write_event(Event::Start(BytesStart::new("resources")))?;

        for sr in &self.strings {
            xml_writer.write_event(Event::Text(BytesText::from_escaped("\n    ")))?;

            let mut elem = BytesStart::new("string");
            elem.push_attribute(("name", sr.name.as_str()));
            xml_writer.write_event(Event::Start(elem))?;
            xml_writer.write_event(Event::Text(BytesText::from_escaped(escape(&sr.value))))?;
            xml_writer.write_event(Event::End(BytesEnd::new("string")))?;
        }

        xml_writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        xml_writer.write_event(Event::End(BytesEnd::new("resources")))?;
        xml_writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
        Ok(())
    }
}

/// A single `<string name="...">` resource.
///
/// The value is raw text; [`escape`] is applied when the file is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringResource {
    pub name: String,
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_escape_plain_text_is_unchanged() {
        assert_eq!(escape("Allow"), "Allow");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_entities_and_quotes() {
        assert_eq!(escape("O'Brien & <Co>"), "O\\'Brien &amp; &lt;Co&gt;");
    }

    #[test]
    fn test_escape_does_not_revisit_introduced_ampersands() {
        assert_eq!(escape("&lt;"), "&amp;lt;");
        assert_eq!(escape("&&"), "&amp;&amp;");
    }

    #[test]
    fn test_escape_double_quote_is_backslashed_not_an_entity() {
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
    }

    #[test]
    fn test_render_full_file() {
        let entry = LocaleEntry {
            title: Some("Privacy & Consent".to_string()),
            message: Some("Don't worry".to_string()),
            allow: Some("Allow".to_string()),
            decline: Some("Decline".to_string()),
        };
        let format = Format::from_entry("en", &entry).unwrap();
        let rendered = format.render().unwrap();
        assert_eq!(
            rendered,
            indoc! {r#"
                <?xml version="1.0" encoding="utf-8"?>
                <resources>
                    <string name="consent_title">Privacy &amp; Consent</string>
                    <string name="consent_message">Don\'t worry</string>
                    <string name="consent_allow">Allow</string>
                    <string name="consent_decline">Decline</string>
                </resources>
            "#}
        );
    }

    #[test]
    fn test_render_empty_value() {
        let format = Format::new([StringResource {
            name: "consent_allow".to_string(),
            value: String::new(),
        }]);
        let rendered = format.render().unwrap();
        assert!(rendered.contains(r#"    <string name="consent_allow"></string>"#));
    }

    #[test]
    fn test_from_entry_missing_field() {
        let entry = LocaleEntry {
            title: Some("T".to_string()),
            message: None,
            allow: Some("A".to_string()),
            decline: Some("D".to_string()),
        };
        let err = Format::from_entry("ja", &entry).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                field: "message",
                ..
            }
        ));
    }
}
