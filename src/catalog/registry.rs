use crate::error::CatalogError;
use std::fmt;
use std::path::PathBuf;

/// A single launchable application as reported by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryRecord {
    /// Label shown to the user.
    pub label: String,
    /// Handle the host understands when asked to launch.
    pub identifier: String,
    /// Resolved icon image, if any.
    pub icon: Option<PathBuf>,
}

impl RegistryRecord {
    pub fn new(label: impl Into<String>, identifier: impl Into<String>, icon: Option<PathBuf>) -> Self {
        Self {
            label: label.into(),
            identifier: identifier.into(),
            icon,
        }
    }
}

/// Trait for querying the host's installed applications.
///
/// Implementations must be thread-safe (Send + Sync) so a registry can be
/// shared between the surface and a CLI command.
pub trait ApplicationRegistry: Send + Sync {
    /// List every application exposing a launchable entry point.
    ///
    /// An empty list means no launchable apps were found. A failed query is
    /// reported as [`CatalogError::Unavailable`].
    fn query_launchable_applications(&self) -> Result<Vec<RegistryRecord>, CatalogError>;

    /// Get the registry name for logging/debugging.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn ApplicationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApplicationRegistry({})", self.name())
    }
}
