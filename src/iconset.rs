//! Iconset directory management
//!
//! Owns the `<name>.iconset` layout: the `icon_<s>x<s>.png` naming
//! convention, PNG writes, and the double-density copy pass.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tiny_skia::Pixmap;

/// A `.iconset` directory under construction.
#[derive(Debug, Clone)]
pub struct Iconset {
    dir: PathBuf,
}

impl Iconset {
    /// Create (or reuse) the iconset directory at `dir`.
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("creating iconset directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the base slot for `size`.
    pub fn base_slot(&self, size: u32) -> PathBuf {
        self.dir.join(format!("icon_{size}x{size}.png"))
    }

    /// Path of the double-density slot for `size`.
    pub fn retina_slot(&self, size: u32) -> PathBuf {
        self.dir.join(format!("icon_{size}x{size}@2x.png"))
    }

    /// Encode `pixmap` into the base slot for `size` and return its path.
    pub fn write_base(&self, size: u32, pixmap: &Pixmap) -> Result<PathBuf> {
        let path = self.base_slot(size);
        pixmap
            .save_png(&path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }

    /// Copy the render for `2 * size` into the `@2x` slot for `size`.
    ///
    /// The `@2x` file must be byte-identical to its source, so this is a
    /// plain file copy, never a re-render. Returns `Ok(None)` when the
    /// source slot was never produced; that variant is skipped silently.
    pub fn copy_retina_variant(&self, size: u32) -> Result<Option<PathBuf>> {
        let src = self.base_slot(size * 2);
        if !src.exists() {
            tracing::debug!(size, src = %src.display(), "retina source missing, skipping");
            return Ok(None);
        }
        let dst = self.retina_slot(size);
        fs::copy(&src, &dst)
            .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
        Ok(Some(dst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::artwork;

    #[test]
    fn test_slot_naming() {
        let set = Iconset {
            dir: PathBuf::from("Term.iconset"),
        };
        assert_eq!(set.base_slot(64).file_name().unwrap(), "icon_64x64.png");
        assert_eq!(set.retina_slot(16).file_name().unwrap(), "icon_16x16@2x.png");
    }

    #[test]
    fn test_write_base_produces_expected_dimensions() {
        let tmp = tempfile::tempdir().unwrap();
        let set = Iconset::create(tmp.path().join("Term.iconset")).unwrap();
        let pixmap = artwork::render(32).unwrap();
        let path = set.write_base(32, &pixmap).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (32, 32));
    }

    #[test]
    fn test_retina_copy_is_byte_identical() {
        let tmp = tempfile::tempdir().unwrap();
        let set = Iconset::create(tmp.path().join("Term.iconset")).unwrap();
        let pixmap = artwork::render(32).unwrap();
        set.write_base(32, &pixmap).unwrap();

        let dst = set
            .copy_retina_variant(16)
            .unwrap()
            .expect("variant should be written");
        assert_eq!(
            fs::read(dst).unwrap(),
            fs::read(set.base_slot(32)).unwrap()
        );
    }

    #[test]
    fn test_missing_retina_source_is_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let set = Iconset::create(tmp.path().join("Term.iconset")).unwrap();
        assert!(set.copy_retina_variant(16).unwrap().is_none());
        assert!(!set.retina_slot(16).exists());
    }

    #[test]
    fn test_create_reuses_an_existing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("Term.iconset");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("stale.png"), b"stale").unwrap();

        let set = Iconset::create(&dir).unwrap();
        // Existing contents are left alone, matching the original behavior.
        assert!(set.dir().join("stale.png").exists());
    }
}
