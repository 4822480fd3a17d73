//! Route planner using bounded breadth-first search.
//!
//! This module implements the core algorithm that answers: "which buses
//! take me from this stop to that stop, with at most N transfers?"
//!
//! Because a bus can be ridden between *any* two of its stops, each line
//! forms a clique of direct connections among its stops. The search
//! therefore considers alighting at every other stop of a boarded line,
//! not just the next one, to find realistic transfer points.

mod config;
mod rank;
mod search;
mod stop_index;


pub use config::SearchConfig;
pub use rank::{deduplicate, rank_routes};
pub use search::{Planner, SearchResult};
pub use stop_index::StopIndex;
