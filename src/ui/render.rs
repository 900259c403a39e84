//! Plain-text rendering of the surface.

use crate::catalog::{AppEntry, DisplayIcon};
use crate::surface::InteractionSurface;
use std::fmt::Write;

/// Prompt label of the search line.
pub const SEARCH_LABEL: &str = "Search apps";

/// Rendering knobs taken from the config.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub show_icons: bool,
    /// Scrim strength over the wallpaper, already clamped to `0.0..=1.0`.
    pub overlay_opacity: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_icons: true,
            overlay_opacity: 0.5,
        }
    }
}

impl RenderOptions {
    /// Options from the global config.
    pub fn from_config() -> Self {
        Self {
            show_icons: crate::config::config().show_icons,
            overlay_opacity: crate::config::overlay_opacity(),
        }
    }
}

/// Marker drawn in front of an entry's name.
fn icon_marker(entry: &AppEntry) -> &'static str {
    match entry.display_icon() {
        DisplayIcon::Image(_) => "[■]",
        DisplayIcon::Placeholder => "[□]",
    }
}

/// Render one entry line. `position` is 1-based.
pub fn render_entry(entry: &AppEntry, position: usize, options: &RenderOptions) -> String {
    if options.show_icons {
        format!("{:>3}. {} {}", position, icon_marker(entry), entry.display_name())
    } else {
        format!("{:>3}. {}", position, entry.display_name())
    }
}

/// Render the whole surface: background line, search line and the list.
pub fn render_surface(surface: &InteractionSurface, options: &RenderOptions) -> String {
    let mut out = String::new();

    if !surface.state().is_loaded() {
        if surface.permission_denied() {
            out.push_str("Storage access was denied, so no applications can be listed.\n");
            out.push_str("Type :retry to ask again or :q to quit.\n");
        } else {
            out.push_str("Waiting for storage permission...\n");
        }
        return out;
    }

    match surface.wallpaper() {
        Some(wallpaper) => {
            let _ = writeln!(
                out,
                "── {} ({}x{}, scrim {:.0}%) ──",
                wallpaper.path.display(),
                wallpaper.width,
                wallpaper.height,
                options.overlay_opacity * 100.0
            );
        }
        None => out.push_str("── plain background ──\n"),
    }

    let _ = writeln!(out, "{}: {}", SEARCH_LABEL, surface.filter_text());

    if let Some(error) = surface.load_error() {
        let _ = writeln!(out, "No applications could be loaded: {}", error);
        return out;
    }

    if surface.catalog().is_empty() {
        out.push_str("No launchable applications found.\n");
        return out;
    }

    if surface.visible_len() == 0 {
        let _ = writeln!(out, "No applications match \"{}\".", surface.filter_text());
        return out;
    }

    for (i, entry) in surface.visible().enumerate() {
        out.push_str(&render_entry(entry, i + 1, options));
        out.push('\n');
    }

    out
}
