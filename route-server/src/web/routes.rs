//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::warn;

use crate::domain::StationCode;
use crate::planner::find_route;

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/route", get(route_query))
        .route("/api/stations", get(list_stations))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Index page with the station pickers.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let stations = state
        .stations
        .options()
        .into_iter()
        .map(|o| StationOptionView {
            code: o.code.as_str().to_string(),
            name: o.name,
        })
        .collect();

    Html(
        IndexTemplate { stations }
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// List all known stations.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let stations = state
        .stations
        .options()
        .into_iter()
        .map(|o| StationResult {
            code: o.code.as_str().to_string(),
            name: o.name,
        })
        .collect();

    Json(StationListResponse { stations })
}

/// Check if request accepts HTML.
fn accepts_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|accept| accept.contains("text/html"))
}

/// Find the minimum-boarding route between two stations.
///
/// Content-negotiated: HTML fragment when the client accepts HTML (the index
/// page's fetch), JSON otherwise.
async fn route_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(req): Query<RouteRequest>,
) -> Result<Response, AppError> {
    // Fail fast on malformed codes, before any search.
    let source = StationCode::parse_normalized(&req.from).map_err(|e| AppError::BadRequest {
        message: format!("invalid 'from' station code {:?}: {}", req.from, e),
    })?;
    let destination = StationCode::parse_normalized(&req.to).map_err(|e| AppError::BadRequest {
        message: format!("invalid 'to' station code {:?}: {}", req.to, e),
    })?;

    match find_route(&state.index, &source, &destination) {
        Some(route) => {
            if accepts_html(&headers) {
                let template =
                    RouteResultsTemplate::from_route(&route, &state.stations, &state.trains);
                let html = template.render().map_err(|e| AppError::Internal {
                    message: format!("Template error: {}", e),
                })?;
                Ok(Html(html).into_response())
            } else {
                Ok(Json(RouteResponse::from_route(&route)).into_response())
            }
        }
        None => {
            // Unknown codes fall out of the search as no-route; say so in
            // the message, it is the likelier mistake.
            let message = if !state.index.knows_station(&source) {
                format!("no trains call at {}", source)
            } else if !state.index.knows_station(&destination) {
                format!("no trains call at {}", destination)
            } else {
                format!("no route found between {} and {}", source, destination)
            };

            if accepts_html(&headers) {
                let html = ErrorTemplate { message }
                    .render()
                    .map_err(|e| AppError::Internal {
                        message: format!("Template error: {}", e),
                    })?;
                Ok(Html(html).into_response())
            } else {
                Err(AppError::NotFound { message })
            }
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        warn!(%status, message = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
