//! Launch capability.

use std::fmt;

/// Trait for asking the host to start an application.
pub trait LaunchService: Send + Sync {
    /// Start the application with the given identifier.
    ///
    /// Returns whether a launch target was found and started. Callers are
    /// free to ignore the result.
    fn start_application(&self, identifier: &str) -> bool;

    /// Get the service name for logging/debugging.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn LaunchService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LaunchService({})", self.name())
    }
}
