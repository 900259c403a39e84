//! Launcher startup: logging, host capabilities and the interactive session.

pub mod events;
pub mod terminal;

pub use events::{
    InputCommand, LauncherEvent, LauncherEventReceiver, LauncherEventSender, create_event_channel,
};

use crate::desktop::{DesktopLauncher, DesktopRegistry, capture_session_environment};
use crate::permission::StoragePermission;
use crate::surface::{Capabilities, InteractionSurface};
use crate::ui::RenderOptions;
use crate::wallpaper::ConfiguredWallpaper;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so listings on stdout stay machine-readable.
pub fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    // Only log from this crate at info level unless RUST_LOG says otherwise
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mmchlaunch=info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Capabilities of the Linux desktop host, configured from the global config.
pub fn desktop_capabilities() -> Capabilities {
    Capabilities {
        registry: Arc::new(DesktopRegistry::from_config()),
        launcher: Arc::new(DesktopLauncher::from_config()),
        permissions: Arc::new(StoragePermission::new()),
        wallpaper: Arc::new(ConfiguredWallpaper::from_config()),
    }
}

/// Run the interactive launcher on the terminal.
/// This is the main entry point when no subcommand is provided.
pub fn run() -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "Starting mmchlaunch");

    // Launched applications inherit the full session environment
    capture_session_environment();

    let mut surface = InteractionSurface::new(desktop_capabilities());
    let stdin = std::io::BufReader::new(std::io::stdin());
    let mut stdout = std::io::stdout();

    terminal::run_loop(&mut surface, stdin, &mut stdout, &RenderOptions::from_config())
}
