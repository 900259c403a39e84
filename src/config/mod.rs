//! Launcher configuration.
//!
//! The config is read once from `~/.config/mmchlaunch/config.toml` at startup
//! and never written back.

mod types;
pub mod validation;

pub use types::AppConfig;
pub use validation::{ValidationWarning, validate_config};

use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Global config instance.
static CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default_const());

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("mmchlaunch"))
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoDirFound)
}

/// Read and parse a config file.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFailed)?;
    toml::from_str::<AppConfig>(&content).map_err(ConfigError::ParseFailed)
}

/// Load application config from the user's config directory.
///
/// Returns `None` if the config file doesn't exist.
/// Logs warning and returns `None` if reading or parsing fails.
fn load_app_config() -> Option<AppConfig> {
    let config_path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("{}, using defaults", e);
            return None;
        }
    };

    if !config_path.exists() {
        tracing::debug!("Config file not found at {:?}, using defaults", config_path);
        return None;
    }

    match load_config_from(&config_path) {
        Ok(config) => {
            tracing::info!("Loaded app config from {:?}", config_path);
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load config file at {:?}: {}, using defaults",
                config_path,
                e
            );
            None
        }
    }
}

/// Initialize config from file (call once at startup).
///
/// Loads and validates the configuration, logging any warnings for invalid
/// or unusual values.
pub fn init_config() {
    let loaded = load_app_config().unwrap_or_default();

    let warnings = validate_config(&loaded);
    validation::log_warnings(&warnings);

    match CONFIG.write() {
        Ok(mut config) => *config = loaded,
        Err(poisoned) => *poisoned.into_inner() = loaded,
    }
}

/// Get a clone of the current config.
pub fn config() -> AppConfig {
    match CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Overlay opacity clamped to the drawable range.
pub fn overlay_opacity() -> f32 {
    config().overlay_opacity.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "icon_size = 64").unwrap();
        writeln!(file, "terminal = \"foot\"").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(config.icon_size, 64);
        assert_eq!(config.terminal.as_deref(), Some("foot"));
        assert_eq!(config.overlay_opacity, 0.5);
        assert!(config.show_icons);
        assert!(config.wallpaper.is_none());
    }

    #[test]
    fn test_load_wallpaper_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wallpaper = \"/home/user/Pictures/bg.png\"").unwrap();

        let config = load_config_from(file.path()).unwrap();
        assert_eq!(
            config.wallpaper,
            Some(PathBuf::from("/home/user/Pictures/bg.png"))
        );
    }

    #[test]
    fn test_load_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "icon_size = \"big\"").unwrap();

        let result = load_config_from(file.path());
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config_from(Path::new("/nonexistent/mmchlaunch.toml"));
        assert!(matches!(result, Err(ConfigError::ReadFailed(_))));
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.icon_size, 48);
        assert_eq!(config.overlay_opacity, 0.5);
    }
}
