//! Web layer for the bus route planner.
//!
//! Provides HTTP endpoints for browsing the catalog and planning
//! journeys.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
