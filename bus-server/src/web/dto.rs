//! Data transfer objects for web requests and responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::Line;
use crate::planner::SearchResult;

/// Request to plan a journey between two stops.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanJourneyRequest {
    /// The starting bus stop.
    pub source_stop: String,

    /// The destination bus stop.
    pub destination_stop: String,
}

/// Response for a journey plan.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanJourneyResponse {
    /// Whether any route was found.
    pub is_route_possible: bool,

    /// Found routes, best-first.
    pub routes: Vec<RouteResult>,

    /// Why the search came back empty; blank when routes exist.
    pub reasoning: String,
}

impl PlanJourneyResponse {
    /// Convert a search result into its wire form.
    pub fn from_search(result: &SearchResult) -> Self {
        let routes = result
            .routes
            .iter()
            .map(|route| RouteResult {
                summary: route.summary.clone(),
                segments: route
                    .segments
                    .iter()
                    .map(|segment| SegmentResult {
                        line_label: segment.line_label.clone(),
                        start_stop: segment.start_stop.clone(),
                        end_stop: segment.end_stop.clone(),
                        stops: segment.stops.clone(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            is_route_possible: result.is_possible,
            routes,
            reasoning: result.reasoning.clone(),
        }
    }
}

/// A route in a journey plan.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Human-readable summary, e.g. "Direct" or "2 Transfers".
    pub summary: String,

    /// The legs of the route, in travel order.
    pub segments: Vec<SegmentResult>,
}

/// One leg of a planned route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentResult {
    /// Display label of the line ridden.
    pub line_label: String,

    /// Boarding stop.
    pub start_stop: String,

    /// Alighting stop.
    pub end_stop: String,

    /// The ridden stops, boarding and alighting inclusive.
    pub stops: Vec<String>,
}

/// A line in the catalog listing.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Unique identifier.
    pub id: String,

    /// Display label.
    pub label: String,

    /// Human-readable description.
    pub description: String,

    /// Ordered stop names.
    pub stops: Vec<String>,
}

impl LineResult {
    /// Convert a line into its wire form.
    pub fn from_line(line: &Line) -> Self {
        Self {
            id: line.id.to_string(),
            label: line.label.clone(),
            description: line.description.clone(),
            stops: line.stops.clone(),
        }
    }
}

/// Response for the catalog listing.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    /// All lines, in catalog order.
    pub lines: Vec<LineResult>,
}

/// Response for the stop listing.
#[derive(Debug, Serialize)]
pub struct StopsResponse {
    /// All stop names, sorted.
    pub stops: Vec<String>,
}

/// Error response payload.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Errors surfaced by the web layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request was malformed
    #[error("{message}")]
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}
