use crate::desktop::entry::DesktopEntry;
use crate::desktop::parser::{ParsedEntry, parse_desktop_file};
use crate::error::CatalogError;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// XDG application directories in precedence order.
///
/// The user's data directory comes first, so a user override of a system
/// entry with the same id wins.
pub fn application_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    if let Some(data_home) = dirs::data_dir() {
        dirs.push(data_home.join("applications"));
    }

    match std::env::var("XDG_DATA_DIRS") {
        Ok(xdg_dirs) if !xdg_dirs.is_empty() => {
            for dir in xdg_dirs.split(':').filter(|d| !d.is_empty()) {
                dirs.push(PathBuf::from(dir).join("applications"));
            }
        }
        _ => {
            dirs.push(PathBuf::from("/usr/local/share/applications"));
            dirs.push(PathBuf::from("/usr/share/applications"));
        }
    }

    dirs
}

/// Scan the given directories for launchable desktop entries.
///
/// Missing directories are skipped. The scan fails only when no directory
/// could be read at all. For each desktop file id the first directory in
/// precedence order decides: a hidden entry there removes the application
/// even if a later directory lists it.
pub fn scan_applications(dirs: &[PathBuf]) -> Result<Vec<DesktopEntry>, CatalogError> {
    let mut entries: HashMap<String, Option<DesktopEntry>> = HashMap::new();
    let mut readable = 0usize;
    let mut last_error = None;

    for dir in dirs {
        match std::fs::read_dir(dir) {
            Ok(_) => {
                readable += 1;
                for (id, path) in desktop_files(dir) {
                    if entries.contains_key(&id) {
                        continue;
                    }
                    match parse_desktop_file(&path, &id) {
                        Some(ParsedEntry::Launchable(entry)) => {
                            entries.insert(id, Some(entry));
                        }
                        Some(ParsedEntry::Suppressed) => {
                            entries.insert(id, None);
                        }
                        None => debug!(?path, "Ignoring unreadable desktop file"),
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(?dir, "Application directory does not exist");
            }
            Err(e) => {
                warn!(?dir, "Failed to read application directory: {}", e);
                last_error = Some(format!("{}: {}", dir.display(), e));
            }
        }
    }

    if readable == 0 {
        return Err(CatalogError::Unavailable(last_error.unwrap_or_else(|| {
            "no application directory could be read".to_string()
        })));
    }

    Ok(entries.into_values().flatten().collect())
}

/// Find the launchable entry with the given desktop file id.
///
/// Follows the same precedence and traversal as [`scan_applications`], so the
/// entry found is the one the scan listed.
pub fn find_entry(dirs: &[PathBuf], id: &str) -> Option<DesktopEntry> {
    for dir in dirs {
        for (file_id, path) in desktop_files(dir) {
            if file_id != id {
                continue;
            }
            match parse_desktop_file(&path, &file_id) {
                Some(ParsedEntry::Launchable(entry)) => return Some(entry),
                Some(ParsedEntry::Suppressed) => return None,
                None => {}
            }
        }
    }
    None
}

/// All `.desktop` files below `root` with their desktop file ids, in a fixed
/// order: entries of a directory sorted by file name, subdirectories visited
/// where they sort.
fn desktop_files(root: &Path) -> Vec<(String, PathBuf)> {
    let mut files = Vec::new();
    collect_desktop_files(root, root, &mut files);
    files
}

fn collect_desktop_files(root: &Path, dir: &Path, files: &mut Vec<(String, PathBuf)>) {
    let Ok(read_dir) = std::fs::read_dir(dir) else {
        return;
    };

    let mut paths: Vec<PathBuf> = read_dir.flatten().map(|entry| entry.path()).collect();
    paths.sort();

    for path in paths {
        if path.is_dir() {
            collect_desktop_files(root, &path, files);
        } else if is_desktop_file(&path)
            && let Some(id) = desktop_file_id(root, &path)
        {
            files.push((id, path));
        }
    }
}

/// Desktop file id of `path` relative to the applications directory `root`.
fn desktop_file_id(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?.with_extension("");
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("-"))
}

fn is_desktop_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "desktop")
}
