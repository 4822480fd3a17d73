//! Catalog loading from JSON.
//!
//! The on-disk format is a JSON array of line records. Records with an
//! invalid id are skipped with a warning rather than failing the whole
//! load; lines with fewer than two stops are kept (the planner simply
//! never rides them) but flagged at load time.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::domain::{Line, LineId};

use super::{Catalog, CatalogError};

/// On-disk record for one bus line.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRecord {
    /// Unique identifier.
    pub id: String,

    /// Display label (the number shown on the bus).
    pub label: String,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Ordered stop names.
    pub stops: Vec<String>,
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Load a catalog from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self, CatalogError> {
        let records: Vec<LineRecord> = serde_json::from_str(data)?;
        let lines = records.into_iter().filter_map(into_line).collect();
        Ok(Self::new(lines))
    }
}

/// Convert a record into a domain line, or drop it with a warning.
fn into_line(record: LineRecord) -> Option<Line> {
    let id = match LineId::parse(&record.id) {
        Ok(id) => id,
        Err(e) => {
            warn!(id = %record.id, label = %record.label, error = %e, "skipping line with invalid id");
            return None;
        }
    };

    if record.stops.len() < 2 {
        warn!(id = %id, label = %record.label, stops = record.stops.len(), "line has fewer than two stops and can never be ridden");
    }

    Some(Line {
        id,
        label: record.label,
        description: record.description,
        stops: record.stops,
    })
}
