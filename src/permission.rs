//! Permission gate in front of catalog loading.
//!
//! The launcher asks for one permission, storage read access, before it
//! builds the catalog. The permission is only a gate; nothing else in the
//! launcher reads user files through it.

use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Permissions the launcher may ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermissionKind {
    /// Read access to the user's data storage.
    StorageRead,
}

/// Answer to a permission check or request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

/// Callback invoked once the host answers a permission request.
pub type PermissionCallback = Box<dyn FnOnce(PermissionStatus) + Send + 'static>;

/// Trait for the host's permission capability.
pub trait PermissionGate: Send + Sync {
    /// Check whether the permission is currently held.
    fn check(&self, kind: PermissionKind) -> PermissionStatus;

    /// Ask for the permission. The answer arrives through `on_result`,
    /// possibly after this call returns.
    fn request(&self, kind: PermissionKind, on_result: PermissionCallback);

    /// Get the gate name for logging/debugging.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn PermissionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PermissionGate({})", self.name())
    }
}

/// Storage permission backed by filesystem access checks.
///
/// A desktop session has no permission dialog, so a request simply checks
/// again: the user can fix directory permissions and retry.
pub struct StoragePermission {
    data_dir: Option<PathBuf>,
}

impl StoragePermission {
    /// Gate on the user's XDG data directory.
    pub fn new() -> Self {
        Self::with_data_dir(dirs::data_dir())
    }

    /// Gate on a specific directory.
    pub fn with_data_dir(data_dir: Option<PathBuf>) -> Self {
        Self { data_dir }
    }

    fn storage_readable(&self) -> bool {
        let Some(dir) = &self.data_dir else {
            return false;
        };
        match std::fs::read_dir(dir) {
            Ok(_) => true,
            Err(e) => {
                debug!(?dir, "Data directory not readable: {}", e);
                false
            }
        }
    }
}

impl Default for StoragePermission {
    fn default() -> Self {
        Self::new()
    }
}

impl PermissionGate for StoragePermission {
    fn check(&self, kind: PermissionKind) -> PermissionStatus {
        match kind {
            PermissionKind::StorageRead if self.storage_readable() => PermissionStatus::Granted,
            PermissionKind::StorageRead => PermissionStatus::Denied,
        }
    }

    fn request(&self, kind: PermissionKind, on_result: PermissionCallback) {
        on_result(self.check(kind));
    }

    fn name(&self) -> &'static str {
        "storage"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_readable_directory_is_granted() {
        let dir = tempfile::tempdir().unwrap();
        let gate = StoragePermission::with_data_dir(Some(dir.path().to_path_buf()));
        assert_eq!(
            gate.check(PermissionKind::StorageRead),
            PermissionStatus::Granted
        );
    }

    #[test]
    fn test_missing_directory_is_denied() {
        let gate = StoragePermission::with_data_dir(Some(PathBuf::from("/nonexistent/data")));
        assert_eq!(
            gate.check(PermissionKind::StorageRead),
            PermissionStatus::Denied
        );
    }

    #[test]
    fn test_no_data_dir_is_denied() {
        let gate = StoragePermission::with_data_dir(None);
        assert!(!gate.check(PermissionKind::StorageRead).is_granted());
    }

    #[test]
    fn test_request_reports_through_callback() {
        let dir = tempfile::tempdir().unwrap();
        let gate = StoragePermission::with_data_dir(Some(dir.path().to_path_buf()));
        let answer = Arc::new(Mutex::new(None));

        let answer_clone = answer.clone();
        gate.request(
            PermissionKind::StorageRead,
            Box::new(move |status| *answer_clone.lock().unwrap() = Some(status)),
        );

        assert_eq!(*answer.lock().unwrap(), Some(PermissionStatus::Granted));
    }
}
