//! Test utilities and mock capabilities.
//!
//! Mock factories for catalog records and entries, plus in-memory
//! implementations of the host capabilities. Only compiled in test builds.

use crate::catalog::{AppEntry, ApplicationRegistry, RegistryRecord};
use crate::error::CatalogError;
use crate::launch::LaunchService;
use crate::permission::{PermissionCallback, PermissionGate, PermissionKind, PermissionStatus};
use crate::surface::Capabilities;
use crate::wallpaper::{Wallpaper, WallpaperSource};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Create a registry record with an `app-<name>` identifier and no icon.
pub fn mock_record(name: &str) -> RegistryRecord {
    RegistryRecord::new(name, format!("app-{}", slug(name)), None)
}

/// Create catalog entries for the given names.
pub fn mock_entries(names: &[&str]) -> Vec<AppEntry> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| AppEntry::new(name.to_string(), format!("app-{}-{}", i, slug(name)), None))
        .collect()
}

/// Write a minimal application `.desktop` file into `dir`.
pub fn write_desktop_file(dir: &Path, id: &str, name: &str, exec: &str) -> PathBuf {
    let path = dir.join(format!("{}.desktop", id));
    let content = format!(
        "[Desktop Entry]\nType=Application\nName={}\nExec={}\n",
        name, exec
    );
    std::fs::write(&path, content).unwrap();
    path
}

/// In-memory application registry.
#[derive(Clone)]
pub struct MockRegistry {
    result: Result<Vec<RegistryRecord>, CatalogError>,
    queries: Arc<AtomicUsize>,
}

impl MockRegistry {
    pub fn with_records(records: Vec<RegistryRecord>) -> Self {
        Self {
            result: Ok(records),
            queries: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            result: Err(CatalogError::Unavailable(reason.to_string())),
            queries: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times the registry was queried.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

impl ApplicationRegistry for MockRegistry {
    fn query_launchable_applications(&self) -> Result<Vec<RegistryRecord>, CatalogError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Launch service that records every request.
pub struct MockLauncher {
    launched: Mutex<Vec<String>>,
    succeed: bool,
}

impl MockLauncher {
    pub fn new() -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            succeed: true,
        }
    }

    /// A launcher whose every launch fails.
    pub fn failing() -> Self {
        Self {
            launched: Mutex::new(Vec::new()),
            succeed: false,
        }
    }

    pub fn launched(&self) -> Vec<String> {
        self.launched.lock().unwrap().clone()
    }
}

impl LaunchService for MockLauncher {
    fn start_application(&self, identifier: &str) -> bool {
        self.launched.lock().unwrap().push(identifier.to_string());
        self.succeed
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Permission gate with a fixed answer that answers requests immediately.
#[derive(Clone)]
pub struct MockGate {
    status: PermissionStatus,
    requests: Arc<AtomicUsize>,
}

impl MockGate {
    pub fn granted() -> Self {
        Self {
            status: PermissionStatus::Granted,
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn denied() -> Self {
        Self {
            status: PermissionStatus::Denied,
            requests: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of permission requests made.
    pub fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

impl PermissionGate for MockGate {
    fn check(&self, _kind: PermissionKind) -> PermissionStatus {
        self.status
    }

    fn request(&self, _kind: PermissionKind, on_result: PermissionCallback) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        on_result(self.status);
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Wallpaper source with a fixed answer.
pub struct MockWallpaper(pub Option<Wallpaper>);

impl WallpaperSource for MockWallpaper {
    fn wallpaper(&self) -> Option<Wallpaper> {
        self.0.clone()
    }
}

/// Bundle mocks into surface capabilities, without a wallpaper.
pub fn mock_capabilities(
    registry: MockRegistry,
    launcher: Arc<MockLauncher>,
    gate: MockGate,
) -> Capabilities {
    Capabilities {
        registry: Arc::new(registry),
        launcher,
        permissions: Arc::new(gate),
        wallpaper: Arc::new(MockWallpaper(None)),
    }
}

/// Permission callback that drops the answer.
pub fn noop_callback() -> PermissionCallback {
    Box::new(|_| {})
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_record() {
        let record = mock_record("Test App");
        assert_eq!(record.label, "Test App");
        assert_eq!(record.identifier, "app-test-app");
        assert!(record.icon.is_none());
    }

    #[test]
    fn test_mock_entries_have_unique_ids() {
        let entries = mock_entries(&["Same", "Same"]);
        assert_ne!(entries[0].identifier(), entries[1].identifier());
    }

    #[test]
    fn test_mock_registry_counts_queries() {
        let registry = MockRegistry::with_records(vec![mock_record("A")]);
        registry.query_launchable_applications().unwrap();
        registry.query_launchable_applications().unwrap();
        assert_eq!(registry.queries(), 2);
    }
}
