//! Drives per-platform resource generation from the master catalog.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    catalog::MasterCatalog,
    error::Error,
    formats::{android_strings, strings},
    platform::Platform,
    traits::Serializer,
};

/// What happened for one entry of a platform locale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resource file was rendered and written.
    Written { locale: String, path: PathBuf },
    /// The locale is absent from the master catalog; nothing was written.
    Skipped { locale: String },
}

/// Generates the resource file for one `(master_key, token)` table entry.
///
/// A locale absent from the catalog is skippable. A present entry missing a
/// required field is fatal and leaves no trace of that file: the content is
/// rendered in memory before the output directory is created, and written
/// with a single create-or-truncate call.
pub fn generate_locale(
    platform: Platform,
    catalog: &MasterCatalog,
    base_dir: &Path,
    master_key: &str,
    token: &str,
) -> Result<Outcome, Error> {
    let Some(entry) = catalog.get(master_key) else {
        return Ok(Outcome::Skipped {
            locale: master_key.to_string(),
        });
    };

    let content = match platform {
        Platform::Ios => strings::Format::from_entry(token, master_key, entry)?.render()?,
        Platform::Android => android_strings::Format::from_entry(master_key, entry)?.render()?,
    };

    let dir = platform.locale_dir(base_dir, token);
    fs::create_dir_all(&dir).map_err(Error::Io)?;

    let path = dir.join(platform.file_name());
    fs::write(&path, content).map_err(Error::Io)?;

    Ok(Outcome::Written {
        locale: master_key.to_string(),
        path,
    })
}

/// Runs the whole locale table of `platform`, in table order.
///
/// Returns one [`Outcome`] per table entry, or the first fatal error.
/// Files written before a fatal error stay in place; the tool is a
/// rerunnable regenerator, not a transaction.
pub fn generate(
    platform: Platform,
    catalog: &MasterCatalog,
    base_dir: &Path,
) -> Result<Vec<Outcome>, Error> {
    platform
        .locale_map()
        .iter()
        .copied()
        .map(|(master_key, token)| generate_locale(platform, catalog, base_dir, master_key, token))
        .collect()
}
