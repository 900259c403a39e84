//! Domain-specific error types for mmchlaunch.
//!
//! Each domain of the launcher gets its own error enum so callers can tell a
//! failed registry query apart from a failed spawn or a broken config file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building the application catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The host application registry could not be queried.
    #[error("Application registry unavailable: {0}")]
    Unavailable(String),
}

/// Process execution errors.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The exec command string was empty.
    #[error("Empty exec command")]
    EmptyCommand,

    /// No terminal emulator could be found.
    #[error("No terminal emulator found. Set $TERMINAL or `terminal` in config.toml.")]
    NoTerminal,

    /// Failed to spawn the process.
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[source] std::io::Error),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read the config file.
    #[error("Failed to read config file: {0}")]
    ReadFailed(#[source] std::io::Error),

    /// Failed to parse the config file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),
}

/// Wallpaper loading errors.
#[derive(Error, Debug)]
pub enum WallpaperError {
    /// The configured wallpaper file does not exist.
    #[error("Wallpaper not found at {0}")]
    NotFound(PathBuf),

    /// The wallpaper file exists but could not be decoded as an image.
    #[error("Failed to decode wallpaper: {0}")]
    Decode(#[source] image::ImageError),
}
