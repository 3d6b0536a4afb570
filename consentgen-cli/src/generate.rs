//! The resource-generation command: runs one platform table and reports progress.

use std::{path::Path, process};

use consentgen::{MasterCatalog, Outcome, Platform, generate_locale};

/// Runs the full locale table for `platform`, printing one line per entry.
///
/// A locale missing from the master file is a warning and the run continues;
/// a malformed entry (missing required field) is fatal. Files written before
/// a fatal error stay in place.
pub fn run_generate_command(platform: Platform, catalog: &MasterCatalog, base_dir: &Path) {
    println!();
    println!("=== Generating {platform} resources ===");

    for (master_key, token) in platform.locale_map().iter().copied() {
        match generate_locale(platform, catalog, base_dir, master_key, token) {
            Ok(Outcome::Written { path, .. }) => println!("Generated: {}", path.display()),
            Ok(Outcome::Skipped { locale }) => {
                println!("Warning: Missing locale '{locale}' in master file");
            }
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        }
    }
}
