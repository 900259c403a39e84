//! Wallpaper drawn behind the application list.
//!
//! The wallpaper is optional. A missing or undecodable image leaves the
//! launcher on a plain background.

use crate::error::WallpaperError;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// A decoded-enough wallpaper: the file and its pixel size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wallpaper {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Wallpaper {
    /// Probe an image file for its dimensions.
    pub fn probe(path: &Path) -> Result<Self, WallpaperError> {
        if !path.exists() {
            return Err(WallpaperError::NotFound(path.to_path_buf()));
        }
        let (width, height) = image::image_dimensions(path).map_err(WallpaperError::Decode)?;
        Ok(Self {
            path: path.to_path_buf(),
            width,
            height,
        })
    }
}

/// Trait for the host's wallpaper capability.
pub trait WallpaperSource: Send + Sync {
    /// The current wallpaper, if one is available.
    fn wallpaper(&self) -> Option<Wallpaper>;
}

impl fmt::Debug for dyn WallpaperSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallpaperSource")
    }
}

/// Wallpaper taken from the `wallpaper` config key.
pub struct ConfiguredWallpaper {
    path: Option<PathBuf>,
}

impl ConfiguredWallpaper {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// Use the wallpaper from the global config.
    pub fn from_config() -> Self {
        Self::new(crate::config::config().wallpaper)
    }
}

impl WallpaperSource for ConfiguredWallpaper {
    fn wallpaper(&self) -> Option<Wallpaper> {
        let Some(path) = &self.path else {
            debug!("No wallpaper configured");
            return None;
        };

        match Wallpaper::probe(path) {
            Ok(wallpaper) => {
                debug!(
                    ?path,
                    width = wallpaper.width,
                    height = wallpaper.height,
                    "Loaded wallpaper"
                );
                Some(wallpaper)
            }
            Err(e) => {
                warn!("{}, using plain background", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        image::RgbImage::new(4, 2).save(&path).unwrap();

        let wallpaper = Wallpaper::probe(&path).unwrap();
        assert_eq!(wallpaper.width, 4);
        assert_eq!(wallpaper.height, 2);
    }

    #[test]
    fn test_probe_missing() {
        let result = Wallpaper::probe(Path::new("/nonexistent/bg.png"));
        assert!(matches!(result, Err(WallpaperError::NotFound(_))));
    }

    #[test]
    fn test_probe_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bg.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let result = Wallpaper::probe(&path);
        assert!(matches!(result, Err(WallpaperError::Decode(_))));
    }

    #[test]
    fn test_configured_none() {
        assert!(ConfiguredWallpaper::new(None).wallpaper().is_none());
    }

    #[test]
    fn test_configured_broken_falls_back() {
        let source = ConfiguredWallpaper::new(Some(PathBuf::from("/nonexistent/bg.png")));
        assert!(source.wallpaper().is_none());
    }
}
