//! Embedded assets for mmchlaunch.
//!
//! Only the placeholder icon lives here: it stands in for applications whose
//! desktop entry names no icon or names one the icon theme can't resolve.

use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Embedded launcher icons.
#[derive(RustEmbed)]
#[folder = "assets"]
struct LauncherAssets;

/// Asset path of the placeholder application icon.
pub const PLACEHOLDER_ICON: &str = "icons/app-placeholder.svg";

lazy_static! {
    static ref PLACEHOLDER_PATH: Option<PathBuf> = cache_placeholder_icon();
}

/// Load an embedded asset by path.
pub fn load(path: &str) -> Option<Cow<'static, [u8]>> {
    if path.is_empty() {
        return None;
    }
    LauncherAssets::get(path).map(|file| file.data)
}

/// Raw SVG bytes of the placeholder application icon.
pub fn placeholder_icon() -> Cow<'static, [u8]> {
    load(PLACEHOLDER_ICON).unwrap_or(Cow::Borrowed(&[]))
}

/// Write the placeholder icon into `dir` and return the file's path.
///
/// An existing file with the same contents is left untouched.
pub fn write_placeholder_icon(dir: &Path) -> io::Result<PathBuf> {
    let data = placeholder_icon();
    let path = dir.join("app-placeholder.svg");

    if std::fs::read(&path).is_ok_and(|existing| existing.as_slice() == data.as_ref()) {
        return Ok(path);
    }

    std::fs::create_dir_all(dir)?;
    std::fs::write(&path, &data)?;
    Ok(path)
}

/// The placeholder icon as a file in the user cache directory, for consumers
/// that need a path rather than bytes. Written on first use.
pub fn placeholder_icon_path() -> Option<&'static Path> {
    PLACEHOLDER_PATH.as_deref()
}

fn cache_placeholder_icon() -> Option<PathBuf> {
    let dir = dirs::cache_dir()?.join("mmchlaunch");
    match write_placeholder_icon(&dir) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!(?dir, "Failed to write placeholder icon: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_is_embedded() {
        let data = placeholder_icon();
        assert!(!data.is_empty());
        assert!(std::str::from_utf8(&data).unwrap().contains("<svg"));
    }

    #[test]
    fn test_empty_path() {
        assert!(load("").is_none());
    }

    #[test]
    fn test_unknown_asset() {
        assert!(load("icons/does-not-exist.svg").is_none());
    }

    #[test]
    fn test_write_placeholder_icon() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("cache");

        let path = write_placeholder_icon(&target).unwrap();
        assert_eq!(path, target.join("app-placeholder.svg"));
        assert_eq!(std::fs::read(&path).unwrap(), placeholder_icon().to_vec());

        std::fs::write(&path, b"stale").unwrap();
        write_placeholder_icon(&target).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), placeholder_icon().to_vec());
    }
}
