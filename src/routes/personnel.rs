use crate::AppState;
use crate::db::models::{ApiResponse, NewPerson, ResponseMeta};
use crate::db::repositories::PersonnelRepo;
use crate::validation::ValidatedJson;
use crate::validation::rules::validate_employee_id_format;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use std::sync::Arc;
use validator::Validate;

// Thin roster endpoints so the scheduler can be exercised end to end; the
// full personnel administration screens live in a separate surface.
#[derive(Deserialize, Validate)]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(
        length(min = 1, message = "Employee id is required"),
        custom(function = "validate_employee_id_format")
    )]
    pub employee_id: String,
}

pub async fn create_person(
    State(state): State<Arc<AppState>>,
    ValidatedJson(payload): ValidatedJson<CreatePersonRequest>,
) -> impl IntoResponse {
    let person = PersonnelRepo::insert(
        &state.db,
        NewPerson {
            first_name: payload.first_name,
            last_name: payload.last_name,
            employee_id: payload.employee_id,
        },
    );
    let response = ApiResponse::created(person, "Person created successfully");
    (StatusCode::CREATED, Json(response)).into_response()
}

pub async fn get_personnel(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let personnel = PersonnelRepo::list(&state.db);
    let total = personnel.len() as i64;
    let response = ApiResponse::success_with_meta(
        personnel,
        "Personnel retrieved successfully",
        ResponseMeta {
            request_id: None,
            total_count: Some(total),
        },
    );
    (StatusCode::OK, Json(response)).into_response()
}
