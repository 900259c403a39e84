use crate::desktop::entry::DesktopEntry;
use crate::desktop::scanner::{application_dirs, find_entry};
use crate::error::ProcessError;
use crate::launch::LaunchService;
use crate::process::{launch_exec, launch_in_terminal};
use std::path::PathBuf;
use tracing::{info, warn};

/// Launch a desktop entry, in a terminal if it asks for one.
pub fn launch_application(entry: &DesktopEntry, terminal: Option<&str>) -> Result<(), ProcessError> {
    if entry.terminal {
        launch_in_terminal(&entry.exec, terminal)
    } else {
        launch_exec(&entry.exec)
    }
}

/// Launch service that resolves identifiers back to desktop files.
///
/// The identifier is looked up again at launch time, so an application that
/// was uninstalled since the catalog was built simply fails to launch.
pub struct DesktopLauncher {
    dirs: Vec<PathBuf>,
    terminal: Option<String>,
}

impl DesktopLauncher {
    pub fn new(dirs: Vec<PathBuf>, terminal: Option<String>) -> Self {
        Self { dirs, terminal }
    }

    /// Launcher over the XDG application directories using the global config.
    pub fn from_config() -> Self {
        Self::new(application_dirs(), crate::config::config().terminal)
    }
}

impl LaunchService for DesktopLauncher {
    fn start_application(&self, identifier: &str) -> bool {
        let Some(entry) = find_entry(&self.dirs, identifier) else {
            warn!(identifier, "No launch target for application");
            return false;
        };

        match launch_application(&entry, self.terminal.as_deref()) {
            Ok(()) => {
                info!(identifier, name = %entry.name, "Launched application");
                true
            }
            Err(e) => {
                warn!(identifier, "Failed to launch application: {}", e);
                false
            }
        }
    }

    fn name(&self) -> &'static str {
        "desktop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::write_desktop_file;

    #[test]
    fn test_unknown_identifier_is_not_launched() {
        let dir = tempfile::tempdir().unwrap();
        let launcher = DesktopLauncher::new(vec![dir.path().to_path_buf()], None);
        assert!(!launcher.start_application("does-not-exist"));
    }

    #[test]
    fn test_unspawnable_entry_is_not_launched() {
        let dir = tempfile::tempdir().unwrap();
        write_desktop_file(
            dir.path(),
            "broken",
            "Broken",
            "/nonexistent/bin/mmchlaunch-broken",
        );
        let launcher = DesktopLauncher::new(vec![dir.path().to_path_buf()], None);
        assert!(!launcher.start_application("broken"));
    }
}
