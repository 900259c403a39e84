//! Sorting and text filtering over the catalog.
//!
//! Names are case-folded once when the filter is built; every keystroke is
//! then a substring scan over the pre-sorted folded names.

use crate::catalog::AppEntry;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Case-insensitive substring filter over catalog entries.
#[derive(Clone, Debug, Default)]
pub struct AppFilter {
    /// Catalog indices in display order.
    order: Vec<usize>,
    /// Folded display names, parallel to `order`.
    folded: Vec<String>,
}

/// Fold a string for case-insensitive comparison.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Primary sort key of a name: case-folded with diacritics removed, so
/// `"Écran"` sorts with the other `e` names instead of after `"Zeta"`.
pub fn collation_key(text: &str) -> String {
    fold_case(text)
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// Display order of two entries: by collation key, then case-folded name
/// (accents break ties), then exact name and identifier so the order is total.
pub fn compare_entries(a: &AppEntry, b: &AppEntry) -> Ordering {
    collation_key(a.display_name())
        .cmp(&collation_key(b.display_name()))
        .then_with(|| tie_break(a, b))
}

fn tie_break(a: &AppEntry, b: &AppEntry) -> Ordering {
    fold_case(a.display_name())
        .cmp(&fold_case(b.display_name()))
        .then_with(|| a.display_name().cmp(b.display_name()))
        .then_with(|| a.identifier().cmp(b.identifier()))
}

impl AppFilter {
    /// Build the filter for a set of entries, sorting them once.
    pub fn new(entries: &[AppEntry]) -> Self {
        let keys: Vec<String> = entries
            .iter()
            .map(|entry| collation_key(entry.display_name()))
            .collect();

        let mut order: Vec<usize> = (0..entries.len()).collect();
        order.sort_by(|&a, &b| {
            keys[a]
                .cmp(&keys[b])
                .then_with(|| tie_break(&entries[a], &entries[b]))
        });

        let folded = order
            .iter()
            .map(|&idx| fold_case(entries[idx].display_name()))
            .collect();

        Self { order, folded }
    }

    /// All indices in display order.
    pub fn sorted(&self) -> Vec<usize> {
        self.order.clone()
    }

    /// Indices of entries whose name contains `query`, ignoring case, in
    /// display order. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        if query.is_empty() {
            return self.sorted();
        }

        let query = fold_case(query);
        self.order
            .iter()
            .zip(&self.folded)
            .filter(|(_, name)| name.contains(&query))
            .map(|(&idx, _)| idx)
            .collect()
    }
}
