//! Icon theme lookup for desktop entries.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

lazy_static::lazy_static! {
    static ref ICON_CACHE: Arc<RwLock<HashMap<(String, u16), Option<PathBuf>>>> =
        Arc::new(RwLock::new(HashMap::new()));
}

static DESKTOP_ICON_THEME: OnceLock<Option<String>> = OnceLock::new();

/// Resolves icon names from desktop entries to image files.
#[derive(Clone, Debug)]
pub struct IconResolver {
    theme: Option<String>,
    size: u16,
}

impl IconResolver {
    /// Create a resolver. Without an explicit theme, the desktop's configured
    /// icon theme is tried first.
    pub fn new(theme: Option<String>, size: u16) -> Self {
        Self { theme, size }
    }

    /// Build a resolver from the global config.
    pub fn from_config() -> Self {
        let config = crate::config::config();
        Self::new(config.icon_theme, config.icon_size)
    }

    /// Resolve an icon name or absolute path, memoised per process.
    pub fn resolve(&self, icon_name: &str) -> Option<PathBuf> {
        let key = (icon_name.to_string(), self.size);

        if let Ok(cache) = ICON_CACHE.read()
            && let Some(cached) = cache.get(&key)
        {
            return cached.clone();
        }

        let path = self.resolve_uncached(icon_name);

        if let Ok(mut cache) = ICON_CACHE.write() {
            cache.insert(key, path.clone());
        }

        path
    }

    fn resolve_uncached(&self, icon_name: &str) -> Option<PathBuf> {
        if icon_name.starts_with('/') {
            let path = Path::new(icon_name);
            return path.exists().then(|| path.to_path_buf());
        }

        let themes = self
            .theme
            .as_deref()
            .into_iter()
            .chain(desktop_icon_theme())
            .chain(std::iter::once("hicolor"));

        for theme in themes {
            let icon = freedesktop_icons::lookup(icon_name)
                .with_size(self.size)
                .with_theme(theme)
                .find();
            if icon.is_some() {
                return icon;
            }
        }

        freedesktop_icons::lookup(icon_name)
            .with_size(self.size)
            .find()
    }
}

/// Icon theme configured by the desktop (KDE first, then GTK 3 and 4).
fn desktop_icon_theme() -> Option<&'static str> {
    DESKTOP_ICON_THEME
        .get_or_init(|| {
            let config_dir = dirs::config_dir()?;
            read_kde_icon_theme(&config_dir.join("kdeglobals"))
                .or_else(|| read_gtk_icon_theme(&config_dir.join("gtk-3.0/settings.ini")))
                .or_else(|| read_gtk_icon_theme(&config_dir.join("gtk-4.0/settings.ini")))
        })
        .as_deref()
}

fn read_kde_icon_theme(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    kde_icon_theme(&content)
}

fn read_gtk_icon_theme(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    gtk_icon_theme(&content)
}

fn kde_icon_theme(content: &str) -> Option<String> {
    let mut in_icons_section = false;
    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('[') {
            in_icons_section = line == "[Icons]";
            continue;
        }
        if in_icons_section && let Some(theme) = line.strip_prefix("Theme=") {
            return Some(theme.trim().to_string());
        }
    }
    None
}

fn gtk_icon_theme(content: &str) -> Option<String> {
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix("gtk-icon-theme-name")
            .and_then(|rest| rest.trim_start().strip_prefix('='))
            .map(|theme| theme.trim().trim_matches('"').to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kde_icon_theme() {
        let content = "[General]\nTheme=ignored\n\n[Icons]\nTheme=breeze-dark\n";
        assert_eq!(kde_icon_theme(content).as_deref(), Some("breeze-dark"));
    }

    #[test]
    fn test_kde_without_icons_section() {
        assert!(kde_icon_theme("[General]\nTheme=foo\n").is_none());
    }

    #[test]
    fn test_gtk_icon_theme() {
        let content = "[Settings]\ngtk-theme-name=Adwaita\ngtk-icon-theme-name = Papirus\n";
        assert_eq!(gtk_icon_theme(content).as_deref(), Some("Papirus"));
    }

    #[test]
    fn test_absolute_icon_path() {
        let dir = tempfile::tempdir().unwrap();
        let icon = dir.path().join("app.png");
        std::fs::write(&icon, b"png").unwrap();

        let resolver = IconResolver::new(None, 48);
        assert_eq!(resolver.resolve(icon.to_str().unwrap()), Some(icon.clone()));
    }

    #[test]
    fn test_missing_absolute_icon_path() {
        let resolver = IconResolver::new(None, 48);
        assert!(resolver.resolve("/nonexistent/icon.png").is_none());
    }
}
