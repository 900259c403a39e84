//! Desktop file parser.

use crate::desktop::entry::DesktopEntry;
use freedesktop_desktop_entry::DesktopEntry as FdEntry;
use std::path::Path;
use tracing::trace;

/// Outcome of parsing a readable `.desktop` file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParsedEntry {
    /// An application that belongs in the list.
    Launchable(DesktopEntry),
    /// A valid desktop file that must not be listed (`NoDisplay`, `Hidden`,
    /// non-`Application` types, or a missing `Name`/`Exec`). It still shadows
    /// files with the same id in lower-precedence directories.
    Suppressed,
}

/// Parse the `.desktop` file at `path`, giving it the desktop file id `id`.
///
/// Returns `None` for unreadable or malformed files.
pub fn parse_desktop_file(path: &Path, id: &str) -> Option<ParsedEntry> {
    let content = std::fs::read_to_string(path).ok()?;
    parse_desktop_str(path, id, &content)
}

/// Parse desktop file contents that were read from `path`.
pub fn parse_desktop_str(path: &Path, id: &str, content: &str) -> Option<ParsedEntry> {
    let fd_entry = FdEntry::from_str(path, content, None::<&[&str]>).ok()?;

    if fd_entry.no_display() || fd_entry.desktop_entry("Hidden") == Some("true") {
        trace!(?path, "Skipping hidden desktop entry");
        return Some(ParsedEntry::Suppressed);
    }

    if let Some(kind) = fd_entry.desktop_entry("Type")
        && kind != "Application"
    {
        trace!(?path, kind, "Skipping non-application desktop entry");
        return Some(ParsedEntry::Suppressed);
    }

    let locales: &[&str] = &[];
    let name = fd_entry.name(locales).map(|s| s.trim().to_string()).unwrap_or_default();
    let exec = fd_entry.exec().map(|s| s.trim().to_string()).unwrap_or_default();
    if name.is_empty() || exec.is_empty() {
        trace!(?path, "Skipping desktop entry without Name or Exec");
        return Some(ParsedEntry::Suppressed);
    }

    let icon = fd_entry
        .icon()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Some(ParsedEntry::Launchable(DesktopEntry {
        id: id.to_string(),
        name,
        exec,
        icon,
        terminal: fd_entry.terminal(),
    }))
}
