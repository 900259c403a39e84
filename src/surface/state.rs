//! Surface state and inbound messages.

/// Where the surface is in its session lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SurfaceState {
    /// Waiting for the storage permission. Nothing is listed.
    #[default]
    AwaitingPermission,
    /// Catalog built, full sorted list shown, no filter typed yet.
    CatalogLoaded,
    /// Filter text is empty; the full sorted list is shown.
    Idle,
    /// Filter text is non-empty; only matching entries are shown.
    Filtering,
    /// A launch is being dispatched to the host.
    LaunchRequested,
}

impl SurfaceState {
    /// Whether the catalog has been loaded.
    pub fn is_loaded(self) -> bool {
        !matches!(self, SurfaceState::AwaitingPermission)
    }
}

/// Messages the surface accepts from the UI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Message {
    /// The search text changed.
    SetFilterText(String),
    /// The user activated the entry with this identifier.
    ActivateEntry(String),
}
