use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use crate::error::AllocationError;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/seats", get(get_seats))
        .route("/seats/book", post(book_seats))
        .route("/seats/reset", post(reset_seats))
}

/* ---------- helpers ---------- */

fn error_response(err: AllocationError) -> (StatusCode, Json<serde_json::Value>) {
    let (status, message) = match &err {
        AllocationError::InvalidCount(_) | AllocationError::NoAvailability => {
            (StatusCode::BAD_REQUEST, err.to_string())
        }
        AllocationError::Storage(e) => {
            tracing::error!("seat storage error: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            )
        }
    };
    (status, Json(json!({ "error": message })))
}

/* ---------- SEATS ---------- */

// GET /api/seats
async fn get_seats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.allocator.list().await {
        Ok(seats) => (StatusCode::OK, Json(seats)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

// POST /api/seats/book
#[derive(Debug, Deserialize)]
struct BookSeatsRequest {
    count: i64,
}

async fn book_seats(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookSeatsRequest>,
) -> impl IntoResponse {
    match state.allocator.allocate(req.count).await {
        Ok(booked) => {
            tracing::info!("booked {} seats for a group of {}", booked.len(), req.count);
            (StatusCode::OK, Json(booked)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}

// POST /api/seats/reset
async fn reset_seats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.allocator.reset().await {
        Ok(seats) => {
            tracing::info!("seat chart reset, {} seats unbooked", seats.len());
            (StatusCode::OK, Json(seats)).into_response()
        }
        Err(e) => error_response(e).into_response(),
    }
}
