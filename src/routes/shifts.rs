use crate::AppState;
use crate::db::models::{ApiResponse, ResponseMeta};
use crate::services::ShiftsService;
use crate::validation::ValidatedJson;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

#[derive(Deserialize, Validate)]
pub struct CreateShiftRequest {
    #[validate(length(min = 1, message = "Shift name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub start_time: Option<chrono::NaiveTime>,
    pub end_time: Option<chrono::NaiveTime>,
}

#[derive(Deserialize)]
pub struct ShiftsQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

pub async fn create_shift(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreateShiftRequest>,
) -> impl IntoResponse {
    match ShiftsService::create(&state.db, &payload) {
        Ok(shift) => {
            let response = ApiResponse::created(shift, "Shift created successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_shifts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ShiftsQuery>,
) -> impl IntoResponse {
    let shifts = ShiftsService::list(&state.db, query.include_inactive);
    let total = shifts.len() as i64;
    let response = ApiResponse::success_with_meta(
        shifts,
        "Shifts retrieved successfully",
        ResponseMeta {
            request_id: None,
            total_count: Some(total),
        },
    );
    (StatusCode::OK, Json(response)).into_response()
}

pub async fn get_shift(
    State(state): State<Arc<AppState>>,
    Path(shift_id): Path<Uuid>,
) -> impl IntoResponse {
    match ShiftsService::get_by_id(&state.db, shift_id) {
        Ok(shift) => {
            let response = ApiResponse::success(shift, "Shift retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn deactivate_shift(
    State(state): State<Arc<AppState>>,
    Path(shift_id): Path<Uuid>,
) -> impl IntoResponse {
    match ShiftsService::deactivate(&state.db, shift_id) {
        Ok(shift) => {
            let response = ApiResponse::success(shift, "Shift deactivated successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn delete_shift(
    State(state): State<Arc<AppState>>,
    Path(shift_id): Path<Uuid>,
) -> impl IntoResponse {
    match ShiftsService::delete(&state.db, shift_id) {
        Ok(()) => {
            let response = ApiResponse::<()>::ok("Shift deleted successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
