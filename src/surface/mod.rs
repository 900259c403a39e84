//! The interaction surface: the searchable application list.
//!
//! The surface owns the catalog snapshot, the filter text and the derived
//! visible list. It only changes in response to the two UI [`Message`]s and
//! to the host answering the permission request, all delivered on one thread.

pub mod filter;
mod state;

pub use filter::AppFilter;
pub use state::{Message, SurfaceState};

use crate::catalog::{AppEntry, ApplicationRegistry, Catalog, build_catalog};
use crate::error::CatalogError;
use crate::launch::LaunchService;
use crate::permission::{PermissionCallback, PermissionGate, PermissionKind, PermissionStatus};
use crate::wallpaper::{Wallpaper, WallpaperSource};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// The permission the surface waits for before building the catalog.
pub const REQUIRED_PERMISSION: PermissionKind = PermissionKind::StorageRead;

/// Host capabilities injected into the surface.
#[derive(Clone)]
pub struct Capabilities {
    pub registry: Arc<dyn ApplicationRegistry>,
    pub launcher: Arc<dyn LaunchService>,
    pub permissions: Arc<dyn PermissionGate>,
    pub wallpaper: Arc<dyn WallpaperSource>,
}

/// Searchable list of launchable applications.
pub struct InteractionSurface {
    capabilities: Capabilities,
    state: SurfaceState,
    /// Set once the host refused the permission.
    permission_denied: bool,
    catalog: Catalog,
    /// Why the catalog is empty, if the registry query failed.
    load_error: Option<CatalogError>,
    filter: AppFilter,
    filter_text: String,
    /// Catalog indices of the visible entries, in display order.
    visible: Vec<usize>,
    wallpaper: Option<Wallpaper>,
}

impl InteractionSurface {
    /// Create a surface in the `AwaitingPermission` state.
    pub fn new(capabilities: Capabilities) -> Self {
        Self {
            capabilities,
            state: SurfaceState::AwaitingPermission,
            permission_denied: false,
            catalog: Catalog::empty(),
            load_error: None,
            filter: AppFilter::default(),
            filter_text: String::new(),
            visible: Vec::new(),
            wallpaper: None,
        }
    }

    /// Check the permission and load the catalog if it is held.
    ///
    /// Otherwise the permission is requested and `on_result` receives the
    /// answer, which must be handed back through [`Self::permission_resolved`].
    pub fn start(&mut self, on_result: PermissionCallback) {
        if self.state.is_loaded() {
            return;
        }

        match self.capabilities.permissions.check(REQUIRED_PERMISSION) {
            PermissionStatus::Granted => self.load_catalog(),
            PermissionStatus::Denied => {
                info!(permission = ?REQUIRED_PERMISSION, "Requesting permission");
                self.capabilities
                    .permissions
                    .request(REQUIRED_PERMISSION, on_result);
            }
        }
    }

    /// Apply the host's answer to a permission request.
    pub fn permission_resolved(&mut self, status: PermissionStatus) {
        if self.state.is_loaded() {
            return;
        }

        match status {
            PermissionStatus::Granted => {
                self.permission_denied = false;
                self.load_catalog();
            }
            PermissionStatus::Denied => {
                warn!(permission = ?REQUIRED_PERMISSION, "Permission denied, nothing to show");
                self.permission_denied = true;
            }
        }
    }

    /// Ask for the permission again after the user refused it.
    ///
    /// Does nothing unless the permission was actually denied.
    pub fn retry_permission(&mut self, on_result: PermissionCallback) {
        if self.state.is_loaded() || !self.permission_denied {
            return;
        }

        info!(permission = ?REQUIRED_PERMISSION, "Retrying permission request");
        self.capabilities
            .permissions
            .request(REQUIRED_PERMISSION, on_result);
    }

    fn load_catalog(&mut self) {
        self.wallpaper = self.capabilities.wallpaper.wallpaper();

        match build_catalog(self.capabilities.registry.as_ref()) {
            Ok(catalog) => {
                self.catalog = catalog;
                self.load_error = None;
            }
            Err(e) => {
                warn!("{}", e);
                self.catalog = Catalog::empty();
                self.load_error = Some(e);
            }
        }

        self.filter = AppFilter::new(self.catalog.entries());
        self.filter_text.clear();
        self.visible = self.filter.sorted();
        self.state = SurfaceState::CatalogLoaded;
    }

    /// Handle a UI message.
    pub fn handle(&mut self, message: Message) {
        match message {
            Message::SetFilterText(text) => self.set_filter_text(text),
            Message::ActivateEntry(identifier) => self.activate_entry(&identifier),
        }
    }

    /// Replace the filter text and recompute the visible entries.
    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        self.filter_text = text.into();
        self.visible = self.filter.filter(&self.filter_text);

        if self.state.is_loaded() {
            self.state = self.resting_state();
        }

        debug!(
            filter = %self.filter_text,
            visible = self.visible.len(),
            "Filter updated"
        );
    }

    /// Ask the host to launch the entry with this identifier.
    ///
    /// Unknown identifiers are ignored. Launch failures are logged and
    /// otherwise dropped.
    pub fn activate_entry(&mut self, identifier: &str) {
        let Some(entry) = self.catalog.get(identifier) else {
            debug!(identifier, "Ignoring activation of unknown entry");
            return;
        };

        self.state = SurfaceState::LaunchRequested;
        debug!(identifier, name = %entry.display_name(), "Launch requested");

        if !self.capabilities.launcher.start_application(identifier) {
            debug!(identifier, "Launch request dropped");
        }

        self.state = self.resting_state();
    }

    fn resting_state(&self) -> SurfaceState {
        if self.filter_text.is_empty() {
            SurfaceState::Idle
        } else {
            SurfaceState::Filtering
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Whether the permission was refused and not granted since.
    pub fn permission_denied(&self) -> bool {
        self.permission_denied
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The registry failure that left the catalog empty, if any.
    pub fn load_error(&self) -> Option<&CatalogError> {
        self.load_error.as_ref()
    }

    pub fn wallpaper(&self) -> Option<&Wallpaper> {
        self.wallpaper.as_ref()
    }

    /// Entries currently shown, in display order.
    pub fn visible(&self) -> impl Iterator<Item = &AppEntry> + '_ {
        let entries = self.catalog.entries();
        self.visible.iter().map(move |&idx| &entries[idx])
    }

    /// Number of entries currently shown.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The visible entry at `position` (0-based, display order).
    pub fn visible_entry(&self, position: usize) -> Option<&AppEntry> {
        self.visible
            .get(position)
            .map(|&idx| &self.catalog.entries()[idx])
    }
}
