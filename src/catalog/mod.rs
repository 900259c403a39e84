//! Application catalog.
//!
//! The catalog is an immutable snapshot of every launchable application,
//! built once per session from an [`ApplicationRegistry`]. It is never
//! refreshed: installs and removals show up on the next start.

mod entry;
mod registry;

pub use entry::{AppEntry, DisplayIcon};
pub use registry::{ApplicationRegistry, RegistryRecord};

use crate::error::CatalogError;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Immutable snapshot of the installed applications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<AppEntry>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All entries, in registry order.
    pub fn entries(&self) -> &[AppEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no launchable application was found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by its identifier.
    pub fn get(&self, identifier: &str) -> Option<&AppEntry> {
        self.entries.iter().find(|e| e.identifier() == identifier)
    }

    /// Whether an entry with this identifier exists.
    pub fn contains(&self, identifier: &str) -> bool {
        self.get(identifier).is_some()
    }
}

/// Build the catalog by querying the registry once.
///
/// Identifiers are unique in the result: if the registry reports the same
/// identifier twice, the first record is kept and the rest are dropped.
pub fn build_catalog(registry: &dyn ApplicationRegistry) -> Result<Catalog, CatalogError> {
    debug!(registry = registry.name(), "Querying launchable applications");
    let records = registry.query_launchable_applications()?;

    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut entries = Vec::with_capacity(records.len());

    for record in records {
        if !seen.insert(record.identifier.clone()) {
            warn!(identifier = %record.identifier, "Duplicate application identifier, skipping");
            continue;
        }
        entries.push(AppEntry::new(record.label, record.identifier, record.icon));
    }

    info!(count = entries.len(), "Built application catalog");
    Ok(Catalog { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{MockRegistry, mock_record};

    #[test]
    fn test_build_maps_records() {
        let registry = MockRegistry::with_records(vec![
            mock_record("Firefox"),
            mock_record("Files"),
        ]);
        let catalog = build_catalog(&registry).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entries()[0].display_name(), "Firefox");
        assert_eq!(catalog.entries()[0].identifier(), "app-firefox");
    }

    #[test]
    fn test_build_identifiers_are_distinct() {
        let registry = MockRegistry::with_records(vec![
            RegistryRecord::new("Editor", "editor", None),
            RegistryRecord::new("Editor (duplicate)", "editor", None),
            RegistryRecord::new("Browser", "browser", None),
        ]);
        let catalog = build_catalog(&registry).unwrap();
        assert_eq!(catalog.len(), 2);

        let ids: HashSet<&str> = catalog.entries().iter().map(|e| e.identifier()).collect();
        assert_eq!(ids.len(), catalog.len());
        assert_eq!(catalog.get("editor").unwrap().display_name(), "Editor");
    }

    #[test]
    fn test_empty_registry_is_not_an_error() {
        let registry = MockRegistry::with_records(vec![]);
        let catalog = build_catalog(&registry).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_unavailable_registry() {
        let registry = MockRegistry::unavailable("permission denied");
        let result = build_catalog(&registry);
        assert!(matches!(result, Err(CatalogError::Unavailable(_))));
    }

    #[test]
    fn test_entries_without_icon_are_kept() {
        let registry = MockRegistry::with_records(vec![RegistryRecord::new(
            "No Icon",
            "no-icon",
            None,
        )]);
        let catalog = build_catalog(&registry).unwrap();
        let entry = catalog.get("no-icon").unwrap();
        assert_eq!(entry.display_icon(), DisplayIcon::Placeholder);
    }

    #[test]
    fn test_contains() {
        let registry = MockRegistry::with_records(vec![mock_record("Firefox")]);
        let catalog = build_catalog(&registry).unwrap();
        assert!(catalog.contains("app-firefox"));
        assert!(!catalog.contains("app-chrome"));
    }
}
