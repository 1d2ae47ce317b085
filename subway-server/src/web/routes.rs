//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::domain::{ErrorKind, LineId, StationId};
use crate::network::NetworkError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(list_stations).post(create_station))
        .route("/stations/:id", delete(delete_station))
        .route("/lines", get(list_lines).post(create_line))
        .route(
            "/lines/:id",
            get(find_line).put(update_line).delete(delete_line),
        )
        .route("/lines/:id/sections", post(add_section))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Register a station.
async fn create_station(
    State(state): State<AppState>,
    body: Result<Json<StationRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = body?;
    let station = state.network.write().await.create_station(&req.name)?;

    let location = format!("/stations/{}", station.id());
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(StationResponse::from_station(&station)),
    )
        .into_response())
}

/// List all stations.
async fn list_stations(State(state): State<AppState>) -> Json<Vec<StationResponse>> {
    let network = state.network.read().await;
    Json(
        network
            .stations()
            .iter()
            .map(StationResponse::from_station)
            .collect(),
    )
}

/// Delete a station no line runs through.
async fn delete_station(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.network.write().await.delete_station(StationId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a line with its first section.
async fn create_line(
    State(state): State<AppState>,
    body: Result<Json<LineRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = body?;
    let view = state.network.write().await.create_line(req.into())?;
    Ok(created_line(LineResponse::from_view(&view)))
}

/// List all lines.
async fn list_lines(State(state): State<AppState>) -> Result<Json<Vec<LineResponse>>, AppError> {
    let views = state.network.read().await.lines()?;
    Ok(Json(views.iter().map(LineResponse::from_view).collect()))
}

/// Get one line with its stations in order.
async fn find_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<LineResponse>, AppError> {
    let view = state.network.read().await.line(LineId(id))?;
    Ok(Json(LineResponse::from_view(&view)))
}

/// Rename or recolor a line.
async fn update_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<UpdateLineRequest>, JsonRejection>,
) -> Result<Json<LineResponse>, AppError> {
    let Json(req) = body?;
    let view = state
        .network
        .write()
        .await
        .update_line(LineId(id), &req.name, &req.color)?;
    Ok(Json(LineResponse::from_view(&view)))
}

/// Delete a line and all its sections.
async fn delete_line(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, AppError> {
    state.network.write().await.delete_line(LineId(id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a section to a line.
async fn add_section(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Result<Json<SectionRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = body?;
    let view = state
        .network
        .write()
        .await
        .add_section(LineId(id), req.into())?;
    Ok(created_line(LineResponse::from_view(&view)))
}

fn created_line(line: LineResponse) -> Response {
    let location = format!("/lines/{}", line.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(line)).into_response()
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        let message = e.to_string();
        match e {
            NetworkError::StationNotFound(_) | NetworkError::LineNotFound(_) => {
                AppError::NotFound { message }
            }
            NetworkError::DuplicateLineName(_) | NetworkError::StationInUse { .. } => {
                AppError::Conflict { message }
            }
            NetworkError::Invalid(_) => AppError::BadRequest { message },
            NetworkError::Topology(t) => match t.kind() {
                ErrorKind::InvalidSection => AppError::BadRequest { message },
                ErrorKind::IllegalState => AppError::Internal { message },
            },
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::BadRequest {
            message: e.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
