//! Stop-to-lines index.

use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::domain::Line;

/// Maps each stop name to the lines that visit it.
///
/// Within each bucket, lines appear in catalog order, so iterating a
/// bucket is deterministic across searches. The index borrows nothing:
/// it holds `Arc<Line>` clones and can outlive the catalog reference it
/// was built from.
#[derive(Debug, Clone, Default)]
pub struct StopIndex {
    lines_by_stop: HashMap<String, Vec<Arc<Line>>>,
}

impl StopIndex {
    /// Build an index from a catalog.
    ///
    /// One entry is appended per stop occurrence, so a (malformed) line
    /// listing a stop twice appears twice in that stop's bucket, exactly
    /// as often as the catalog says it calls there.
    pub fn build(catalog: &Catalog) -> Self {
        let mut lines_by_stop: HashMap<String, Vec<Arc<Line>>> = HashMap::new();

        for line in catalog.lines() {
            for stop in &line.stops {
                lines_by_stop
                    .entry(stop.clone())
                    .or_default()
                    .push(line.clone());
            }
        }

        Self { lines_by_stop }
    }

    /// Returns the lines serving a stop, in catalog order.
    ///
    /// Unknown stops yield an empty slice.
    pub fn lines_at(&self, stop: &str) -> &[Arc<Line>] {
        self.lines_by_stop
            .get(stop)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Returns true if any line serves the stop.
    pub fn contains(&self, stop: &str) -> bool {
        self.lines_by_stop.contains_key(stop)
    }

    /// Returns the number of distinct stops indexed.
    pub fn stop_count(&self) -> usize {
        self.lines_by_stop.len()
    }

    /// Returns true if the index has no stops.
    pub fn is_empty(&self) -> bool {
        self.lines_by_stop.is_empty()
    }
}
