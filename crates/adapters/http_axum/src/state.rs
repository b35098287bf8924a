//! Shared application state for axum handlers.

use std::sync::Arc;

use hearth_app::services::hierarchy_service::HierarchyService;

/// Application state shared across all axum handlers.
///
/// Cloning only clones the `Arc`; every handler talks to the same store.
#[derive(Clone)]
pub struct AppState {
    /// User / house / room / device service.
    pub hierarchy: Arc<HierarchyService>,
}

impl AppState {
    /// Create a new application state owning the given service.
    #[must_use]
    pub fn new(hierarchy: HierarchyService) -> Self {
        Self::from_arc(Arc::new(hierarchy))
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is also held elsewhere, e.g. by a test
    /// that inspects the store after driving the router.
    #[must_use]
    pub fn from_arc(hierarchy: Arc<HierarchyService>) -> Self {
        Self { hierarchy }
    }
}
