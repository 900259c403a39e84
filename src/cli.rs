use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::app::events::{LauncherEvent, create_event_channel, permission_callback};
use crate::catalog::{AppEntry, DisplayIcon};
use crate::surface::{Capabilities, InteractionSurface, Message};
use crate::ui::{RenderOptions, render_entry};

#[derive(Parser, Debug)]
#[command(name = "mmchlaunch")]
#[command(about = "A minimal home-screen style application launcher")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive launcher (default)
    Run,
    /// List all launchable applications
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List applications whose name contains TEXT (case-insensitive)
    Search {
        text: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Launch an application by identifier
    Launch { identifier: String },
    /// Check the config file and print any warnings
    ConfigCheck,
}

/// Build a surface and load its catalog without user interaction.
///
/// Fails if the storage permission is not granted.
pub fn load_surface(capabilities: Capabilities) -> Result<InteractionSurface> {
    let (tx, rx) = create_event_channel();
    let mut surface = InteractionSurface::new(capabilities);
    surface.start(permission_callback(&tx));

    while let Ok(LauncherEvent::Permission(status)) = rx.try_recv() {
        surface.permission_resolved(status);
    }

    if !surface.state().is_loaded() {
        anyhow::bail!("Storage permission denied, cannot list applications");
    }
    if let Some(error) = surface.load_error() {
        anyhow::bail!("{}", error);
    }

    Ok(surface)
}

/// One application in the JSON listing.
#[derive(Debug, Serialize)]
struct ListedApp<'a> {
    display_name: &'a str,
    identifier: &'a str,
    /// Icon file to show: the resolved theme icon or the placeholder file.
    icon: Option<&'a Path>,
    placeholder: bool,
}

impl<'a> ListedApp<'a> {
    fn new(entry: &'a AppEntry, placeholder_icon: Option<&'a Path>) -> Self {
        let (icon, placeholder) = match entry.display_icon() {
            DisplayIcon::Image(path) => (Some(path), false),
            DisplayIcon::Placeholder => (placeholder_icon, true),
        };
        Self {
            display_name: entry.display_name(),
            identifier: entry.identifier(),
            icon,
            placeholder,
        }
    }
}

/// Print the visible entries of a loaded surface.
///
/// In JSON, entries without an icon point at `placeholder_icon`.
pub fn print_visible<W: Write>(
    surface: &InteractionSurface,
    json: bool,
    placeholder_icon: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    if json {
        let entries: Vec<ListedApp> = surface
            .visible()
            .map(|entry| ListedApp::new(entry, placeholder_icon))
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(());
    }

    let options = RenderOptions {
        show_icons: false,
        ..RenderOptions::default()
    };
    for (i, entry) in surface.visible().enumerate() {
        writeln!(
            out,
            "{}  ({})",
            render_entry(entry, i + 1, &options),
            entry.identifier()
        )?;
    }
    Ok(())
}

fn listing_placeholder(json: bool) -> Option<&'static Path> {
    if json { crate::assets::placeholder_icon_path() } else { None }
}

/// Handle a non-interactive command.
pub fn handle_command<W: Write>(cmd: Commands, capabilities: Capabilities, out: &mut W) -> Result<()> {
    match cmd {
        Commands::Run => crate::app::run(),
        Commands::List { json } => {
            let surface = load_surface(capabilities)?;
            print_visible(&surface, json, listing_placeholder(json), out)
        }
        Commands::Search { text, json } => {
            let mut surface = load_surface(capabilities)?;
            surface.handle(Message::SetFilterText(text));
            print_visible(&surface, json, listing_placeholder(json), out)
        }
        Commands::Launch { identifier } => {
            let launcher = capabilities.launcher.clone();
            let surface = load_surface(capabilities)?;
            let entry = surface
                .catalog()
                .get(&identifier)
                .with_context(|| format!("No application with identifier '{}'", identifier))?;

            if !launcher.start_application(entry.identifier()) {
                anyhow::bail!("Failed to launch '{}'", entry.display_name());
            }
            Ok(())
        }
        Commands::ConfigCheck => check_config(out),
    }
}

fn check_config<W: Write>(out: &mut W) -> Result<()> {
    let path = crate::config::config_path()?;
    if !path.exists() {
        writeln!(out, "No config file at {}, using defaults", path.display())?;
        return Ok(());
    }

    let config = crate::config::load_config_from(&path)?;
    let warnings = crate::config::validate_config(&config);
    if warnings.is_empty() {
        writeln!(out, "{}: OK", path.display())?;
    }
    for warning in warnings {
        writeln!(out, "{}: {}", warning.field, warning.message)?;
    }
    Ok(())
}
