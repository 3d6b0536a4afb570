//! Validate-only mode: report catalog problems without writing any files.

use consentgen::{MasterCatalog, Platform};

/// Checks the catalog against the platform tables and prints findings.
///
/// Returns the process exit code: 0 when the catalog is complete and
/// well-formed, 1 otherwise.
pub fn run_check_command(catalog: &MasterCatalog) -> i32 {
    let mut problems = 0usize;

    for code in catalog.malformed_locales() {
        problems += 1;
        println!("Problem: locale key '{code}' is not a well-formed language identifier");
    }

    for platform in Platform::ALL {
        for (master_key, _) in platform.locale_map().iter().copied() {
            if !catalog.contains(master_key) {
                problems += 1;
                println!(
                    "Problem: locale '{master_key}' required for {platform} is missing from master file"
                );
            }
        }
    }

    for (locale, entry) in catalog.entries() {
        for field in entry.missing_fields() {
            problems += 1;
            println!("Problem: locale '{locale}' is missing required field '{field}'");
        }
    }

    println!();
    if problems == 0 {
        println!("Master file OK");
        0
    } else {
        println!("Found {problems} problem(s)");
        1
    }
}
