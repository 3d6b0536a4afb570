//! Target platforms and their locale tables.
//!
//! The tables are plain data on purpose: adding platform support for a new
//! locale means editing a table, not code.

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::error::Error;

/// iOS mapping: master locale code -> `.lproj` folder name.
pub const IOS_LOCALES: [(&str, &str); 12] = [
    ("en", "en"),
    ("ko", "ko"),
    ("de", "de"),
    ("fr", "fr"),
    ("es", "es"),
    ("it", "it"),
    ("ja", "ja"),
    ("zh-Hans", "zh-Hans"),
    ("pt", "pt-BR"),
    ("nl", "nl"),
    ("pl", "pl"),
    ("sv", "sv"),
];

/// Android mapping: master locale code -> `values` folder suffix.
///
/// The empty suffix is the default locale, written to plain `values/`.
pub const ANDROID_LOCALES: [(&str, &str); 12] = [
    ("en", ""),
    ("ko", "-ko"),
    ("de", "-de"),
    ("fr", "-fr"),
    ("es", "-es"),
    ("it", "-it"),
    ("ja", "-ja"),
    ("zh-Hans", "-zh-rCN"),
    ("pt", "-pt-rBR"),
    ("nl", "-nl"),
    ("pl", "-pl"),
    ("sv", "-sv"),
];

/// A resource-generation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Apple `.lproj` bundles with `Localizable.strings` files.
    Ios,
    /// Android `values*` directories with `strings.xml` files.
    Android,
}

impl Platform {
    /// Both targets, in generation order.
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    /// The `(master locale, platform token)` table for this platform.
    pub fn locale_map(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Platform::Ios => &IOS_LOCALES,
            Platform::Android => &ANDROID_LOCALES,
        }
    }

    /// The fixed file name written inside each locale directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Platform::Ios => "Localizable.strings",
            Platform::Android => "strings.xml",
        }
    }

    /// Resolves the per-locale output directory under `base`.
    pub fn locale_dir(&self, base: &Path, token: &str) -> PathBuf {
        match self {
            Platform::Ios => base.join(format!("{token}.lproj")),
            Platform::Android => base.join(format!("values{token}")),
        }
    }

    /// Full path of the resource file for one locale token.
    pub fn output_path(&self, base: &Path, token: &str) -> PathBuf {
        self.locale_dir(base, token).join(self.file_name())
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Ios => write!(f, "iOS"),
            Platform::Android => write!(f, "Android"),
        }
    }
}

/// Accepts the case-insensitive names `"ios"` and `"android"`.
///
/// Returns [`Error::UnknownPlatform`] for anything else.
impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            other => Err(Error::UnknownPlatform(other.to_string())),
        }
    }
}
