use crate::AppState;
use crate::db::models::{ApiResponse, ResponseMeta};
use crate::services::SchedulingService;
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
pub struct CreateAssignmentRequest {
    pub personnel_id: Uuid,
    pub shift_id: Uuid,
    pub date: chrono::NaiveDate,
}

#[derive(Deserialize)]
pub struct AssignmentsQuery {
    pub date: Option<chrono::NaiveDate>,
    pub personnel_id: Option<Uuid>,
    pub shift_id: Option<Uuid>,
}

pub async fn create_assignment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAssignmentRequest>,
) -> impl IntoResponse {
    let today = chrono::Local::now().date_naive();
    match SchedulingService::assign(
        &state.db,
        state.roster.as_ref(),
        today,
        payload.personnel_id,
        payload.shift_id,
        payload.date,
    ) {
        Ok(assignment) => {
            let response = ApiResponse::created(assignment, "Shift assigned successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn delete_assignment(
    State(state): State<Arc<AppState>>,
    Path(assignment_id): Path<Uuid>,
) -> impl IntoResponse {
    match SchedulingService::unassign(&state.db, assignment_id) {
        Ok(_) => {
            let response = ApiResponse::<()>::ok("Assignment removed successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_assignments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AssignmentsQuery>,
) -> impl IntoResponse {
    let assignments = SchedulingService::list(
        &state.db,
        state.roster.as_ref(),
        query.date,
        query.personnel_id,
        query.shift_id,
    );
    let total = assignments.len() as i64;
    let response = ApiResponse::success_with_meta(
        assignments,
        "Assignments retrieved successfully",
        ResponseMeta {
            request_id: None,
            total_count: Some(total),
        },
    );
    (StatusCode::OK, Json(response)).into_response()
}
