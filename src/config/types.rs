//! Configuration type definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Image drawn behind the application list.
    pub wallpaper: Option<PathBuf>,
    /// Opacity of the scrim drawn over the wallpaper (0.0 - 1.0).
    pub overlay_opacity: f32,
    /// Preferred icon theme. Falls back to the desktop's theme, then hicolor.
    pub icon_theme: Option<String>,
    /// Icon size in pixels requested from the icon theme.
    pub icon_size: u16,
    /// Show an icon marker next to each entry.
    pub show_icons: bool,
    /// Terminal emulator used for `Terminal=true` applications.
    pub terminal: Option<String>,
}

impl AppConfig {
    /// Const default for static initialization.
    pub const fn default_const() -> Self {
        Self {
            wallpaper: None,
            overlay_opacity: 0.5,
            icon_theme: None,
            icon_size: 48,
            show_icons: true,
            terminal: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_const()
    }
}
