//! Journey and route result types.
//!
//! A `Journey` is a validated chain of hops from origin to destination.
//! A `FoundRoute` is the presentation-ready form handed back to callers.

use std::collections::HashSet;

use super::{DomainError, Hop};

/// A complete journey from origin to destination.
///
/// # Invariants
///
/// - At least one hop
/// - Consecutive hops connect (alighting stop of one = boarding stop of next)
/// - No line id appears in two hops (a bus is never re-boarded, even in
///   the opposite direction)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    hops: Vec<Hop>,
}

impl Journey {
    /// Constructs a journey from hops, validating the invariants above.
    pub fn new(hops: Vec<Hop>) -> Result<Self, DomainError> {
        if hops.is_empty() {
            return Err(DomainError::EmptyJourney);
        }

        for window in hops.windows(2) {
            if window[0].end_stop() != window[1].start_stop() {
                return Err(DomainError::HopsNotConnected(
                    window[0].end_stop().to_string(),
                    window[1].start_stop().to_string(),
                ));
            }
        }

        let mut seen = HashSet::new();
        for hop in &hops {
            if !seen.insert(hop.line_id().clone()) {
                return Err(DomainError::LineReused(hop.line_id().clone()));
            }
        }

        Ok(Journey { hops })
    }

    /// Returns the hops in travel order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Returns the number of bus rides.
    pub fn ride_count(&self) -> usize {
        self.hops.len()
    }

    /// Returns the number of transfers (rides minus one).
    pub fn transfer_count(&self) -> usize {
        self.hops.len() - 1
    }

    /// Returns the total number of stops ridden across all hops,
    /// endpoints included per hop.
    pub fn total_stops(&self) -> usize {
        self.hops.iter().map(Hop::stop_count).sum()
    }

    /// Returns the boarding stop of the first hop.
    pub fn origin(&self) -> &str {
        self.hops[0].start_stop()
    }

    /// Returns the alighting stop of the last hop.
    pub fn destination(&self) -> &str {
        self.hops[self.hops.len() - 1].end_stop()
    }

    /// Returns a string encoding of the hop sequence for exact-duplicate
    /// detection.
    ///
    /// Keyed on line id rather than display label, so distinct lines that
    /// share a label never collapse into one entry.
    pub fn signature(&self) -> String {
        self.hops
            .iter()
            .map(|hop| format!("{}:{}-{}", hop.line_id(), hop.start_stop(), hop.end_stop()))
            .collect::<Vec<_>>()
            .join("|")
    }

    /// Returns the display summary: `"Direct"` for a single ride, else the
    /// transfer count.
    pub fn summary(&self) -> String {
        match self.transfer_count() {
            0 => "Direct".to_string(),
            1 => "1 Transfer".to_string(),
            n => format!("{n} Transfers"),
        }
    }
}

/// One displayed leg of a found route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSegment {
    /// Display label of the line ridden.
    pub line_label: String,

    /// Boarding stop.
    pub start_stop: String,

    /// Alighting stop.
    pub end_stop: String,

    /// The ridden stops, boarding and alighting inclusive.
    pub stops: Vec<String>,
}

/// A presentation-ready route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundRoute {
    /// Human-readable summary, e.g. `"Direct"` or `"2 Transfers"`.
    pub summary: String,

    /// The legs of the route, in travel order.
    pub segments: Vec<RouteSegment>,
}

impl FoundRoute {
    /// Render a journey into its displayed form.
    pub fn from_journey(journey: &Journey) -> Self {
        let segments = journey
            .hops()
            .iter()
            .map(|hop| RouteSegment {
                line_label: hop.line_label().to_string(),
                start_stop: hop.start_stop().to_string(),
                end_stop: hop.end_stop().to_string(),
                stops: hop.stops().to_vec(),
            })
            .collect();

        FoundRoute {
            summary: journey.summary(),
            segments,
        }
    }

    /// Returns the number of transfers in this route.
    pub fn transfer_count(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{Line, LineId};

    fn line(id: &str, label: &str, stops: &[&str]) -> Arc<Line> {
        Arc::new(Line {
            id: LineId::parse(id).unwrap(),
            label: label.to_string(),
            description: String::new(),
            stops: stops.iter().map(|s| s.to_string()).collect(),
        })
    }

    fn hop(l: &Arc<Line>, start: &str, end: &str) -> Hop {
        Hop::between(l.clone(), start, end).unwrap()
    }

    #[test]
    fn direct_journey() {
        let l = line("1", "15", &["A", "B", "C"]);
        let journey = Journey::new(vec![hop(&l, "A", "C")]).unwrap();

        assert_eq!(journey.ride_count(), 1);
        assert_eq!(journey.transfer_count(), 0);
        assert_eq!(journey.total_stops(), 3);
        assert_eq!(journey.origin(), "A");
        assert_eq!(journey.destination(), "C");
        assert_eq!(journey.summary(), "Direct");
    }

    #[test]
    fn transfer_summaries() {
        let l1 = line("1", "15", &["A", "B"]);
        let l2 = line("2", "27", &["B", "C"]);
        let l3 = line("3", "33", &["C", "D"]);

        let one = Journey::new(vec![hop(&l1, "A", "B"), hop(&l2, "B", "C")]).unwrap();
        assert_eq!(one.summary(), "1 Transfer");
        assert_eq!(one.transfer_count(), 1);

        let two = Journey::new(vec![
            hop(&l1, "A", "B"),
            hop(&l2, "B", "C"),
            hop(&l3, "C", "D"),
        ])
        .unwrap();
        assert_eq!(two.summary(), "2 Transfers");
        assert_eq!(two.total_stops(), 6);
    }

    #[test]
    fn empty_journey_rejected() {
        assert!(matches!(
            Journey::new(vec![]),
            Err(DomainError::EmptyJourney)
        ));
    }

    #[test]
    fn disconnected_hops_rejected() {
        let l1 = line("1", "15", &["A", "B"]);
        let l2 = line("2", "27", &["C", "D"]);

        let err = Journey::new(vec![hop(&l1, "A", "B"), hop(&l2, "C", "D")]).unwrap_err();
        assert!(matches!(err, DomainError::HopsNotConnected(..)));
    }

    #[test]
    fn line_reuse_rejected_even_in_opposite_direction() {
        let l = line("1", "15", &["A", "B", "C"]);

        let err = Journey::new(vec![hop(&l, "A", "C"), hop(&l, "C", "A")]).unwrap_err();
        assert!(matches!(err, DomainError::LineReused(_)));
    }

    #[test]
    fn signature_keys_on_id_not_label() {
        // Two distinct lines with the same display label.
        let a = line("10a", "10", &["A", "B"]);
        let b = line("10b", "10", &["A", "B"]);

        let ja = Journey::new(vec![hop(&a, "A", "B")]).unwrap();
        let jb = Journey::new(vec![hop(&b, "A", "B")]).unwrap();

        assert_ne!(ja.signature(), jb.signature());
    }

    #[test]
    fn signature_orders_hops() {
        let l1 = line("1", "15", &["A", "B"]);
        let l2 = line("2", "27", &["B", "C"]);

        let j = Journey::new(vec![hop(&l1, "A", "B"), hop(&l2, "B", "C")]).unwrap();
        assert_eq!(j.signature(), "1:A-B|2:B-C");
    }

    #[test]
    fn found_route_rendering() {
        let l1 = line("1", "15", &["A", "B", "C"]);
        let l2 = line("2", "27", &["C", "D"]);

        let journey = Journey::new(vec![hop(&l1, "A", "C"), hop(&l2, "C", "D")]).unwrap();
        let route = FoundRoute::from_journey(&journey);

        assert_eq!(route.summary, "1 Transfer");
        assert_eq!(route.transfer_count(), 1);
        assert_eq!(route.segments.len(), 2);
        assert_eq!(route.segments[0].line_label, "15");
        assert_eq!(route.segments[0].stops, ["A", "B", "C"]);
        assert_eq!(route.segments[1].start_stop, "C");
        assert_eq!(route.segments[1].end_stop, "D");
    }
}
