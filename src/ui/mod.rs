//! Terminal rendering of the launcher.

pub mod render;

pub use render::{RenderOptions, render_entry, render_surface};
