use crate::catalog::{ApplicationRegistry, RegistryRecord};
use crate::desktop::icon::IconResolver;
use crate::desktop::scanner::{application_dirs, scan_applications};
use crate::error::CatalogError;
use std::path::PathBuf;
use tracing::debug;

/// Application registry backed by XDG `.desktop` files.
pub struct DesktopRegistry {
    dirs: Vec<PathBuf>,
    icons: IconResolver,
}

impl DesktopRegistry {
    pub fn new(dirs: Vec<PathBuf>, icons: IconResolver) -> Self {
        Self { dirs, icons }
    }

    /// Registry over the XDG application directories using the global config.
    pub fn from_config() -> Self {
        Self::new(application_dirs(), IconResolver::from_config())
    }
}

impl ApplicationRegistry for DesktopRegistry {
    fn query_launchable_applications(&self) -> Result<Vec<RegistryRecord>, CatalogError> {
        let entries = scan_applications(&self.dirs)?;
        debug!(count = entries.len(), "Scanned desktop entries");

        Ok(entries
            .into_iter()
            .map(|entry| {
                let icon = entry.icon.as_deref().and_then(|name| self.icons.resolve(name));
                RegistryRecord::new(entry.name, entry.id, icon)
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}
