mod check;
mod generate;

use std::{path::PathBuf, process};

use clap::Parser;
use consentgen::{MasterCatalog, Platform};

use crate::{check::run_check_command, generate::run_generate_command};

/// Generates iOS and Android resource files from the master consent strings
/// catalog. With no arguments it reads the project-relative master file and
/// writes into the fixed platform resource directories.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Master strings file to read
    #[arg(long, default_value = "resources/consent_strings.json")]
    master: PathBuf,

    /// Output directory for iOS `.lproj` bundles
    #[arg(long, default_value = "ios/Sources/ConsentUI/Resources")]
    ios_resources: PathBuf,

    /// Output directory for Android `values` resources
    #[arg(long, default_value = "android/consentui/src/main/res")]
    android_res: PathBuf,

    /// Generate resources for a single platform (ios or android) instead of both
    #[arg(long)]
    platform: Option<Platform>,

    /// Validate the master file against the platform tables without writing anything
    #[arg(long)]
    check: bool,
}

fn main() {
    let args = Args::parse();

    println!("Loading master strings...");
    let catalog = match MasterCatalog::read_from(&args.master) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    println!();
    println!(
        "Found {} locales: {}",
        catalog.len(),
        catalog.locales().collect::<Vec<_>>().join(", ")
    );

    if args.check {
        process::exit(run_check_command(&catalog));
    }

    let platforms = match args.platform {
        Some(platform) => vec![platform],
        None => Platform::ALL.to_vec(),
    };

    for platform in platforms {
        let base_dir = match platform {
            Platform::Ios => &args.ios_resources,
            Platform::Android => &args.android_res,
        };
        run_generate_command(platform, &catalog, base_dir);
    }

    println!();
    println!("Done!");
}
