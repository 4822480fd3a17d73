//! Application state for the web layer.

use std::sync::Arc;

use crate::cache::CachedPlanner;
use crate::catalog::Catalog;

/// Shared application state.
///
/// Contains everything needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The immutable line catalog.
    pub catalog: Arc<Catalog>,

    /// Cached route planner.
    pub planner: Arc<CachedPlanner>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Arc<Catalog>, planner: CachedPlanner) -> Self {
        Self {
            catalog,
            planner: Arc::new(planner),
        }
    }
}
