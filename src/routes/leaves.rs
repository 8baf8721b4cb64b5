use crate::AppState;
use crate::db::enums::{LeaveDecision, LeaveStatus};
use crate::db::models::{ApiResponse, ResponseMeta};
use crate::services::LeavesService;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Deserialize)]
pub struct RequestLeaveRequest {
    pub personnel_id: Uuid,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub leave_type_id: Uuid,
}

#[derive(Deserialize)]
pub struct DecideLeaveRequest {
    pub decision: LeaveDecision,
}

#[derive(Deserialize)]
pub struct LeavesQuery {
    pub personnel_id: Option<Uuid>,
    pub status: Option<LeaveStatus>,
}

pub async fn request_leave(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RequestLeaveRequest>,
) -> impl IntoResponse {
    match LeavesService::request(&state.db, &payload) {
        Ok(leave) => {
            let response = ApiResponse::created(leave, "Leave requested successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn decide_leave(
    State(state): State<Arc<AppState>>,
    Path(leave_id): Path<Uuid>,
    Json(payload): Json<DecideLeaveRequest>,
) -> impl IntoResponse {
    match LeavesService::decide(&state.db, leave_id, payload.decision) {
        Ok(leave) => {
            let response = ApiResponse::success(leave, "Leave decision recorded");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn cancel_leave(
    State(state): State<Arc<AppState>>,
    Path(leave_id): Path<Uuid>,
) -> impl IntoResponse {
    match LeavesService::cancel(&state.db, leave_id) {
        Ok(leave) => {
            let response = ApiResponse::success(leave, "Leave cancelled successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_leaves(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LeavesQuery>,
) -> impl IntoResponse {
    let leaves = LeavesService::list(&state.db, query.personnel_id, query.status);
    let total = leaves.len() as i64;
    let response = ApiResponse::success_with_meta(
        leaves,
        "Leave intervals retrieved successfully",
        ResponseMeta {
            request_id: None,
            total_count: Some(total),
        },
    );
    (StatusCode::OK, Json(response)).into_response()
}
