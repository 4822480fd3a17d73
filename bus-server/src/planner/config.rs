//! Search configuration for the route planner.

/// Configuration parameters for route search.
///
/// The transfer bound is the user-facing tunable; the two caps are safety
/// valves against pathological catalogs and exist mainly so tests can
/// tighten them.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum number of transfers allowed (rides minus one).
    pub max_transfers: usize,

    /// Maximum number of completed routes to collect before stopping.
    pub max_results: usize,

    /// Hard cap on search loop iterations.
    pub max_iterations: usize,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_transfers: usize, max_results: usize, max_iterations: usize) -> Self {
        Self {
            max_transfers,
            max_results,
            max_iterations,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_transfers: 2,
            max_results: 50,
            max_iterations: 5000,
        }
    }
}
