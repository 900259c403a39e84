use std::path::{Path, PathBuf};

/// A launchable application as shown in the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppEntry {
    display_name: String,
    identifier: String,
    icon: Option<PathBuf>,
}

/// The icon to draw for an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayIcon<'a> {
    /// A resolved image file from the icon theme.
    Image(&'a Path),
    /// The embedded placeholder, used when the application has no icon.
    Placeholder,
}

impl AppEntry {
    pub fn new(display_name: String, identifier: String, icon: Option<PathBuf>) -> Self {
        Self {
            display_name,
            identifier,
            icon,
        }
    }

    /// Human-readable label. Not unique.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Opaque handle used to request a launch. Unique within a catalog.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Resolved icon image, if the application has one.
    pub fn icon(&self) -> Option<&Path> {
        self.icon.as_deref()
    }

    /// Icon to draw, falling back to the placeholder.
    pub fn display_icon(&self) -> DisplayIcon<'_> {
        match self.icon() {
            Some(path) => DisplayIcon::Image(path),
            None => DisplayIcon::Placeholder,
        }
    }
}
