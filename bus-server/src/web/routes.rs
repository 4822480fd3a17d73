//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stops", get(list_stops))
        .route("/api/lines", get(list_lines))
        .route("/journey/plan", post(plan_journey))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every stop name in the catalog.
async fn list_stops(State(state): State<AppState>) -> Json<StopsResponse> {
    Json(StopsResponse {
        stops: state.catalog.stop_names(),
    })
}

/// List the full catalog.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let lines = state
        .catalog
        .lines()
        .iter()
        .map(|line| LineResult::from_line(line))
        .collect();

    Json(LinesResponse { lines })
}

/// Plan a journey between two stops.
///
/// Blank input is a 400; everything else, including unknown stops, is a
/// 200 with `isRoutePossible: false` and a reasoning string.
async fn plan_journey(
    State(state): State<AppState>,
    Json(request): Json<PlanJourneyRequest>,
) -> Result<Json<PlanJourneyResponse>, AppError> {
    let source = request.source_stop.trim();
    let destination = request.destination_stop.trim();

    if source.is_empty() {
        return Err(AppError::BadRequest {
            message: "sourceStop must not be blank".to_string(),
        });
    }
    if destination.is_empty() {
        return Err(AppError::BadRequest {
            message: "destinationStop must not be blank".to_string(),
        });
    }

    let result = state.planner.find_routes(source, destination).await;
    Ok(Json(PlanJourneyResponse::from_search(&result)))
}
