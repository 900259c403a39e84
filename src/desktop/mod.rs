//! Linux desktop host: XDG desktop entries as the application registry and
//! detached processes as the launch capability.

pub mod entry;
pub mod env;
pub mod exec;
pub mod icon;
pub mod parser;
pub mod registry;
pub mod scanner;

pub use entry::DesktopEntry;
pub use env::{capture_session_environment, get_session_environment};
pub use exec::{DesktopLauncher, launch_application};
pub use icon::IconResolver;
pub use registry::DesktopRegistry;
pub use scanner::{application_dirs, scan_applications};
