//! Route ranking and deduplication.
//!
//! Orders raw search output into the final result set: fewest transfers
//! first, shortest rides first among equals, exact duplicates removed.

use std::collections::HashSet;

use crate::domain::Journey;

/// Rank routes by preference.
///
/// Routes are ranked by:
/// 1. Number of rides (fewer transfers is better)
/// 2. Total stops ridden across all hops (shorter is better)
///
/// The sort is stable, so ties keep discovery order.
pub fn rank_routes(mut routes: Vec<Journey>) -> Vec<Journey> {
    routes.sort_by_key(|journey| (journey.ride_count(), journey.total_stops()));
    routes
}

/// Remove exact structural duplicates, keeping the first of each
/// signature.
///
/// Signatures are keyed on line id plus boarding/alighting stops, so two
/// distinct lines sharing a display label are never merged, while the
/// same line ridden over the same span through a different enqueue order
/// is. Run after [`rank_routes`] so the survivor of each signature is the
/// best-ranked one.
pub fn deduplicate(routes: Vec<Journey>) -> Vec<Journey> {
    let mut seen = HashSet::new();
    routes
        .into_iter()
        .filter(|journey| seen.insert(journey.signature()))
        .collect()
}


#[cfg(test)]
mod proptests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::domain::{Hop, Journey, Line, LineId};

    /// Build a journey with one hop per entry in `hop_stop_counts`, where
    /// entry `i` rides a dedicated line with that many stops. Hops chain
    /// through shared connector stops, so the journey always validates.
    fn journey_with(hop_stop_counts: &[usize]) -> Journey {
        let hops = hop_stop_counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let mut stops = vec![format!("C{i}")];
                for mid in 0..count.saturating_sub(2) {
                    stops.push(format!("M{i}x{mid}"));
                }
                stops.push(format!("C{}", i + 1));

                let line = Arc::new(Line {
                    id: LineId::parse(&format!("L{i}s{count}")).unwrap(),
                    label: format!("{i}"),
                    description: String::new(),
                    stops,
                });
                let start = format!("C{i}");
                let end = format!("C{}", i + 1);
                Hop::between(line, &start, &end).unwrap()
            })
            .collect();

        Journey::new(hops).unwrap()
    }

    fn journeys_strategy() -> impl Strategy<Value = Vec<Journey>> {
        prop::collection::vec(prop::collection::vec(2usize..6, 1..4), 0..12)
            .prop_map(|shapes| {
                shapes
                    .iter()
                    .map(|shape| journey_with(shape))
                    .collect::<Vec<_>>()
            })
    }

    proptest! {
        #[test]
        fn rank_routes_is_sorted(journeys in journeys_strategy()) {
            let ranked = rank_routes(journeys);

            for window in ranked.windows(2) {
                let a = (window[0].ride_count(), window[0].total_stops());
                let b = (window[1].ride_count(), window[1].total_stops());
                prop_assert!(a <= b, "not sorted: {:?} before {:?}", a, b);
            }
        }

        #[test]
        fn rank_routes_preserves_elements(journeys in journeys_strategy()) {
            let original_len = journeys.len();
            prop_assert_eq!(rank_routes(journeys).len(), original_len);
        }

        #[test]
        fn deduplicate_yields_unique_signatures(journeys in journeys_strategy()) {
            let result = deduplicate(journeys);

            let mut seen = std::collections::HashSet::new();
            for journey in &result {
                prop_assert!(seen.insert(journey.signature()));
            }
        }

        #[test]
        fn deduplicate_is_subset(journeys in journeys_strategy()) {
            let original_len = journeys.len();
            prop_assert!(deduplicate(journeys).len() <= original_len);
        }

        #[test]
        fn rank_then_dedup_idempotent(journeys in journeys_strategy()) {
            let once = deduplicate(rank_routes(journeys));
            let twice = deduplicate(rank_routes(once.clone()));
            prop_assert_eq!(once, twice);
        }
    }
}
