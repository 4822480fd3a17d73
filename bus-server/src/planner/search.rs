//! Bounded BFS route search.
//!
//! Candidates are expanded from a FIFO queue, so they are processed in
//! non-decreasing order of rides taken; fewest-transfer routes surface
//! first and the explicit ranking pass only has to break ties.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::domain::{FoundRoute, Hop, Journey, LineId};

use super::config::SearchConfig;
use super::rank::{deduplicate, rank_routes};
use super::stop_index::StopIndex;

/// Result of a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Whether any route was found.
    pub is_possible: bool,

    /// Found routes, ranked best-first and deduplicated.
    pub routes: Vec<FoundRoute>,

    /// Why the search came back empty; blank when routes exist.
    pub reasoning: String,
}

impl SearchResult {
    fn impossible(reasoning: &str) -> Self {
        Self {
            is_possible: false,
            routes: Vec::new(),
            reasoning: reasoning.to_string(),
        }
    }

    fn found(routes: Vec<FoundRoute>) -> Self {
        Self {
            is_possible: true,
            routes,
            reasoning: String::new(),
        }
    }
}

/// BFS state: a partial journey ending at a stop.
///
/// Invariant: `used_lines` is exactly the set of line ids of `hops`.
#[derive(Debug, Clone)]
struct Candidate {
    current_stop: String,
    hops: Vec<Hop>,
    used_lines: HashSet<LineId>,
}

/// Route planner over an immutable catalog.
///
/// Each `find_routes` call owns its queue, visited map and candidates, so
/// one planner can serve concurrent queries without locking.
pub struct Planner {
    catalog: Arc<Catalog>,
    index: StopIndex,
    config: SearchConfig,
}

impl Planner {
    /// Create a planner.
    ///
    /// The stop index is built once here; the catalog must not change
    /// behind the planner's back (it can't: lines are immutable).
    pub fn new(catalog: Arc<Catalog>, config: SearchConfig) -> Self {
        let index = StopIndex::build(&catalog);
        Self {
            catalog,
            index,
            config,
        }
    }

    /// Returns the catalog this planner searches over.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Returns the search configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find every route from `source` to `destination` within the
    /// configured transfer bound.
    ///
    /// Never fails: bad input (same stop twice, unknown stops, catalogs
    /// with degenerate lines) produces an empty result with a reasoning
    /// string.
    pub fn find_routes(&self, source: &str, destination: &str) -> SearchResult {
        if source.to_lowercase() == destination.to_lowercase() {
            return SearchResult::impossible("Source and destination are the same.");
        }

        let max_rides = self.config.max_transfers + 1;

        let mut queue: VecDeque<Candidate> = VecDeque::new();
        queue.push_back(Candidate {
            current_stop: source.to_string(),
            hops: Vec::new(),
            used_lines: HashSet::new(),
        });

        // Minimum ride count at which each stop was first reached. A stop
        // seen at depth D is never re-enqueued at depth >= D, even though
        // the dropped path may carry a different set of usable lines.
        let mut visited: HashMap<String, usize> = HashMap::new();
        visited.insert(source.to_string(), 0);

        let mut completed: Vec<Journey> = Vec::new();
        let mut iterations = 0usize;

        while let Some(candidate) = queue.pop_front() {
            iterations += 1;
            if iterations > self.config.max_iterations {
                warn!(
                    iterations,
                    found = completed.len(),
                    "iteration cap hit, truncating search"
                );
                break;
            }
            if completed.len() >= self.config.max_results {
                warn!(
                    found = completed.len(),
                    "solution cap hit, truncating search"
                );
                break;
            }

            // Already used more rides than the bound allows.
            if candidate.hops.len() > max_rides {
                continue;
            }

            for line in self.index.lines_at(&candidate.current_stop) {
                if candidate.used_lines.contains(&line.id) {
                    continue;
                }

                if line.serves(destination) {
                    // The final hop counts against the ride budget too.
                    // Completing here never blocks trying the remaining
                    // lines from this same candidate.
                    if candidate.hops.len() < max_rides {
                        if let Ok(hop) =
                            Hop::between(line.clone(), &candidate.current_stop, destination)
                        {
                            let mut hops = candidate.hops.clone();
                            hops.push(hop);
                            if let Ok(journey) = Journey::new(hops) {
                                completed.push(journey);
                            }
                        }
                    }
                    continue;
                }

                // This line needs a transfer afterwards; forbidden once
                // every allowed ride is spent.
                if candidate.hops.len() >= max_rides {
                    continue;
                }

                let next_depth = candidate.hops.len() + 1;
                for next_stop in &line.stops {
                    if next_stop == &candidate.current_stop {
                        continue;
                    }
                    if visited.get(next_stop).is_some_and(|&d| d <= next_depth) {
                        continue;
                    }
                    visited.insert(next_stop.clone(), next_depth);

                    if let Ok(hop) =
                        Hop::between(line.clone(), &candidate.current_stop, next_stop)
                    {
                        let mut hops = candidate.hops.clone();
                        hops.push(hop);
                        let mut used_lines = candidate.used_lines.clone();
                        used_lines.insert(line.id.clone());
                        queue.push_back(Candidate {
                            current_stop: next_stop.clone(),
                            hops,
                            used_lines,
                        });
                    }
                }
            }
        }

        debug!(
            iterations,
            found = completed.len(),
            "route search finished"
        );

        let ranked = deduplicate(rank_routes(completed));
        if ranked.is_empty() {
            return SearchResult::impossible("No routes found matching criteria.");
        }

        SearchResult::found(ranked.iter().map(FoundRoute::from_journey).collect())
    }
}
