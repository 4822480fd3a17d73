//! Bus hop type.
//!
//! A `Hop` represents a single uninterrupted ride on one line between two
//! stops. It uses `Arc<Line>` for cheap cloning in the BFS search.

use std::sync::Arc;

use super::{DomainError, Line, LineId};

/// One ride on one line.
///
/// Construction extracts the exact sub-sequence of the line's stops that
/// the ride covers, oriented from boarding stop to alighting stop. Lines
/// are bidirectional, so when the alighting stop precedes the boarding
/// stop in the canonical stop order the slice is reversed.
///
/// # Invariants
///
/// - Both stops appear on the line
/// - Boarding and alighting stops are distinct positions
/// - `stops()` starts with `start_stop()` and ends with `end_stop()`
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use bus_server::domain::{Hop, Line, LineId};
///
/// let line = Arc::new(Line {
///     id: LineId::parse("1").unwrap(),
///     label: "15".to_string(),
///     description: "Statebank to KPT".to_string(),
///     stops: vec!["Statebank".into(), "Hampankatta".into(), "PVS".into()],
/// });
///
/// let out = Hop::between(line.clone(), "Statebank", "PVS").unwrap();
/// assert_eq!(out.stops(), ["Statebank", "Hampankatta", "PVS"]);
///
/// // Riding the other way reverses the sequence
/// let back = Hop::between(line, "PVS", "Statebank").unwrap();
/// assert_eq!(back.stops(), ["PVS", "Hampankatta", "Statebank"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    line: Arc<Line>,
    start: String,
    end: String,
    stops: Vec<String>,
}

impl Hop {
    /// Construct a hop on `line` from `start` to `end`.
    ///
    /// If a stop name appears more than once on a line (malformed but
    /// tolerated data), the first occurrence is used for both lookups, so
    /// the result is deterministic.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either stop is absent from the line, or if both
    /// names resolve to the same position.
    pub fn between(line: Arc<Line>, start: &str, end: &str) -> Result<Self, DomainError> {
        let start_idx = line
            .stop_position(start)
            .ok_or_else(|| DomainError::StopNotOnLine {
                stop: start.to_string(),
                line: line.id.clone(),
            })?;
        let end_idx = line
            .stop_position(end)
            .ok_or_else(|| DomainError::StopNotOnLine {
                stop: end.to_string(),
                line: line.id.clone(),
            })?;

        if start_idx == end_idx {
            return Err(DomainError::InvalidHop(
                "boarding and alighting stops must differ",
            ));
        }

        let stops = if start_idx < end_idx {
            line.stops[start_idx..=end_idx].to_vec()
        } else {
            let mut reversed = line.stops[end_idx..=start_idx].to_vec();
            reversed.reverse();
            reversed
        };

        Ok(Hop {
            line,
            start: start.to_string(),
            end: end.to_string(),
            stops,
        })
    }

    /// Returns the line this hop rides.
    pub fn line(&self) -> &Arc<Line> {
        &self.line
    }

    /// Returns the id of the line this hop rides.
    pub fn line_id(&self) -> &LineId {
        &self.line.id
    }

    /// Returns the display label of the line this hop rides.
    pub fn line_label(&self) -> &str {
        &self.line.label
    }

    /// Returns the boarding stop.
    pub fn start_stop(&self) -> &str {
        &self.start
    }

    /// Returns the alighting stop.
    pub fn end_stop(&self) -> &str {
        &self.end
    }

    /// Returns the ridden stops, boarding and alighting inclusive.
    pub fn stops(&self) -> &[String] {
        &self.stops
    }

    /// Returns the number of stops ridden, endpoints included.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(stops: &[&str]) -> Arc<Line> {
        Arc::new(Line {
            id: LineId::parse("1").unwrap(),
            label: "15".to_string(),
            description: "Test line".to_string(),
            stops: stops.iter().map(|s| s.to_string()).collect(),
        })
    }

    #[test]
    fn forward_segment() {
        let l = line(&["Statebank", "Hampankatta", "PVS", "MG Road", "KPT"]);
        let hop = Hop::between(l, "Hampankatta", "MG Road").unwrap();

        assert_eq!(hop.start_stop(), "Hampankatta");
        assert_eq!(hop.end_stop(), "MG Road");
        assert_eq!(hop.stops(), ["Hampankatta", "PVS", "MG Road"]);
        assert_eq!(hop.stop_count(), 3);
    }

    #[test]
    fn reverse_segment_runs_start_to_end() {
        let l = line(&["Statebank", "Hampankatta", "PVS", "MG Road", "KPT"]);
        let hop = Hop::between(l, "KPT", "Hampankatta").unwrap();

        assert_eq!(hop.stops(), ["KPT", "MG Road", "PVS", "Hampankatta"]);
        assert_eq!(hop.stops().first().map(String::as_str), Some("KPT"));
        assert_eq!(hop.stops().last().map(String::as_str), Some("Hampankatta"));
    }

    #[test]
    fn full_line_both_directions() {
        let l = line(&["A", "B", "C"]);

        let fwd = Hop::between(l.clone(), "A", "C").unwrap();
        assert_eq!(fwd.stops(), ["A", "B", "C"]);

        let rev = Hop::between(l, "C", "A").unwrap();
        assert_eq!(rev.stops(), ["C", "B", "A"]);
    }

    #[test]
    fn missing_stop_is_an_error() {
        let l = line(&["A", "B", "C"]);

        let err = Hop::between(l.clone(), "A", "Z").unwrap_err();
        assert!(matches!(err, DomainError::StopNotOnLine { .. }));

        let err = Hop::between(l, "Z", "A").unwrap_err();
        assert!(matches!(err, DomainError::StopNotOnLine { .. }));
    }

    #[test]
    fn same_stop_is_an_error() {
        let l = line(&["A", "B", "C"]);
        let err = Hop::between(l, "B", "B").unwrap_err();
        assert!(matches!(err, DomainError::InvalidHop(_)));
    }

    #[test]
    fn single_stop_line_cannot_be_ridden() {
        let l = line(&["A"]);
        assert!(Hop::between(l, "A", "A").is_err());
    }

    #[test]
    fn duplicate_stop_names_resolve_to_first_occurrence() {
        // Malformed but tolerated: "A" appears twice.
        let l = line(&["A", "B", "A", "C"]);
        let hop = Hop::between(l, "A", "C").unwrap();

        // First occurrence of "A" is index 0, so the whole span is ridden.
        assert_eq!(hop.stops(), ["A", "B", "A", "C"]);
    }
}
