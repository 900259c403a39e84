//! Configuration validation utilities.
//!
//! Provides validation for configuration values, returning warnings for
//! non-fatal issues that should be logged but don't prevent startup.

use super::types::AppConfig;

/// Smallest icon size that still renders legibly.
const MIN_ICON_SIZE: u16 = 16;
/// Largest icon size icon themes commonly ship.
const MAX_ICON_SIZE: u16 = 512;

/// Non-fatal validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    /// The field that has an issue.
    pub field: String,
    /// A description of the issue.
    pub message: String,
}

/// Validate the entire config, returning warnings for non-fatal issues.
///
/// This function checks for:
/// - Overlay opacity outside `0.0..=1.0`
/// - Icon sizes outside the range icon themes provide
/// - A configured wallpaper that does not exist
/// - An empty terminal command
pub fn validate_config(config: &AppConfig) -> Vec<ValidationWarning> {
    let mut warnings = vec![];

    if !(0.0..=1.0).contains(&config.overlay_opacity) {
        warnings.push(ValidationWarning {
            field: "overlay_opacity".to_string(),
            message: format!(
                "Opacity {} is outside 0.0 - 1.0. It will be clamped.",
                config.overlay_opacity
            ),
        });
    }

    if config.icon_size < MIN_ICON_SIZE {
        warnings.push(ValidationWarning {
            field: "icon_size".to_string(),
            message: format!(
                "Icon size {} is below minimum ({}).",
                config.icon_size, MIN_ICON_SIZE
            ),
        });
    } else if config.icon_size > MAX_ICON_SIZE {
        warnings.push(ValidationWarning {
            field: "icon_size".to_string(),
            message: format!(
                "Icon size {} exceeds maximum ({}). Most themes won't have it.",
                config.icon_size, MAX_ICON_SIZE
            ),
        });
    }

    if let Some(path) = &config.wallpaper
        && !path.exists()
    {
        warnings.push(ValidationWarning {
            field: "wallpaper".to_string(),
            message: format!("Wallpaper {:?} does not exist. A plain background is used.", path),
        });
    }

    if let Some(terminal) = &config.terminal
        && terminal.trim().is_empty()
    {
        warnings.push(ValidationWarning {
            field: "terminal".to_string(),
            message: "Terminal is empty. $TERMINAL or xterm will be used.".to_string(),
        });
    }

    warnings
}

/// Log all validation warnings.
pub fn log_warnings(warnings: &[ValidationWarning]) {
    for warning in warnings {
        tracing::warn!(field = %warning.field, "{}", warning.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let warnings = validate_config(&AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_opacity_out_of_range() {
        let config = AppConfig {
            overlay_opacity: 1.5,
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, "overlay_opacity");
    }

    #[test]
    fn test_icon_size_bounds() {
        let small = AppConfig {
            icon_size: 8,
            ..AppConfig::default()
        };
        assert_eq!(validate_config(&small)[0].field, "icon_size");

        let large = AppConfig {
            icon_size: 1024,
            ..AppConfig::default()
        };
        assert_eq!(validate_config(&large)[0].field, "icon_size");
    }

    #[test]
    fn test_missing_wallpaper() {
        let config = AppConfig {
            wallpaper: Some(PathBuf::from("/nonexistent/wallpaper.png")),
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "wallpaper"));
    }

    #[test]
    fn test_empty_terminal() {
        let config = AppConfig {
            terminal: Some("  ".to_string()),
            ..AppConfig::default()
        };
        let warnings = validate_config(&config);
        assert!(warnings.iter().any(|w| w.field == "terminal"));
    }
}
