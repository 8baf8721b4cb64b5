use crate::AppState;
use crate::db::models::ApiResponse;
use crate::services::DashboardService;
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct DashboardQuery {
    pub date: Option<chrono::NaiveDate>,
}

pub async fn get_dashboard_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> impl IntoResponse {
    let date = query.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    match DashboardService::stats(&state.db, state.roster.as_ref(), date) {
        Ok(stats) => {
            let response = ApiResponse::success(stats, "Dashboard stats retrieved successfully");
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => e.into_response(),
    }
}
