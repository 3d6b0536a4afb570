//! Traits for format-agnostic serialization in consentgen.

use std::{fs, path::Path};

use crate::error::Error;

/// A trait for rendering a platform resource file to a writer or path.
///
/// # Example
///
/// ```rust,no_run
/// use consentgen::traits::Serializer;
/// use consentgen::formats::strings::Format;
/// let format = Format::new("en", []);
/// format.write_to("en.lproj/Localizable.strings")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Serializer {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, writer: W) -> Result<(), Error>;

    /// Render to an owned UTF-8 string.
    fn render(&self) -> Result<String, Error> {
        let mut buf = Vec::new();
        self.to_writer(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::Io(std::io::Error::other(e)))
    }

    /// Write to file path.
    ///
    /// The file is rendered fully in memory first and written in one
    /// create-or-truncate call, so a failed render never leaves a
    /// truncated file behind.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let content = self.render()?;
        fs::write(path, content).map_err(Error::Io)
    }
}
