//! The generation flow
//!
//! Renders every base size, duplicates the double-density slots, then
//! hands the finished iconset to the packager and reports the outcome.

use std::path::Path;

use anyhow::Result;

use crate::icon::{self, artwork};
use crate::iconset::Iconset;
use crate::packager::{PackageStatus, Packager};

/// App name baked into the artifact paths and the install hint.
const APP_NAME: &str = "Term";

/// Run the full fixed flow against the system temp directory.
pub fn run() -> Result<()> {
    let tmp = std::env::temp_dir();
    let iconset_dir = tmp.join(format!("{APP_NAME}.iconset"));
    let icns_path = tmp.join(format!("{APP_NAME}.icns"));
    run_with(&iconset_dir, &icns_path, &Packager::new())
}

/// The flow with injectable locations and packager, for tests.
fn run_with(iconset_dir: &Path, icns_path: &Path, packager: &Packager) -> Result<()> {
    let iconset = Iconset::create(iconset_dir)?;

    for &size in &icon::BASE_SIZES {
        let pixmap = artwork::render(size)?;
        let path = iconset.write_base(size, &pixmap)?;
        tracing::debug!(size, "rendered base slot");
        println!("Created {}", path.display());
    }

    for &size in &icon::RETINA_SIZES {
        if let Some(path) = iconset.copy_retina_variant(size)? {
            println!("Created {}", path.display());
        }
    }

    match packager.package(iconset.dir(), icns_path) {
        PackageStatus::Packaged => {
            println!("\n✅ Icon created: {}", icns_path.display());
            println!(
                "To install: cp {} ~/Applications/{APP_NAME}.app/Contents/Resources/",
                icns_path.display()
            );
        }
        PackageStatus::Failed { detail } => {
            println!("Error: {detail}");
        }
    }

    Ok(())
}
