//! Bus line catalog.
//!
//! The catalog is the static list of lines the planner searches over. It
//! is loaded once (from JSON, or the built-in network) and treated as
//! immutable for the lifetime of the process.

mod builtin;
mod error;
mod load;

use std::sync::Arc;

use crate::domain::{Line, LineId};

pub use builtin::mangalore_network;
pub use error::CatalogError;
pub use load::LineRecord;

/// An immutable, ordered collection of bus lines.
///
/// Order is significant: the stop index preserves catalog order within
/// each stop's bucket, which makes search output deterministic.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lines: Vec<Arc<Line>>,
}

impl Catalog {
    /// Create a catalog from lines, preserving their order.
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            lines: lines.into_iter().map(Arc::new).collect(),
        }
    }

    /// Returns the lines in catalog order.
    pub fn lines(&self) -> &[Arc<Line>] {
        &self.lines
    }

    /// Returns the number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the catalog has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Look up a line by its id.
    pub fn line_by_id(&self, id: &LineId) -> Option<&Arc<Line>> {
        self.lines.iter().find(|line| &line.id == id)
    }

    /// Returns every stop name in the catalog, sorted and deduplicated.
    pub fn stop_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .lines
            .iter()
            .flat_map(|line| line.stops.iter().cloned())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
