pub mod assignments;
pub mod dashboard;
pub mod leaves;
pub mod personnel;
pub mod shifts;

use crate::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/shifts", post(shifts::create_shift))
        .route("/shifts", get(shifts::get_shifts))
        .route("/shifts/:shift_id", get(shifts::get_shift))
        .route("/shifts/:shift_id", delete(shifts::delete_shift))
        .route(
            "/shifts/:shift_id/deactivate",
            post(shifts::deactivate_shift),
        )
        .route("/leaves", post(leaves::request_leave))
        .route("/leaves", get(leaves::get_leaves))
        .route("/leaves/:leave_id/decision", post(leaves::decide_leave))
        .route("/leaves/:leave_id/cancel", post(leaves::cancel_leave))
        .route("/assignments", post(assignments::create_assignment))
        .route("/assignments", get(assignments::get_assignments))
        .route(
            "/assignments/:assignment_id",
            delete(assignments::delete_assignment),
        )
        .route("/dashboard/stats", get(dashboard::get_dashboard_stats))
        .route("/personnel", post(personnel::create_person))
        .route("/personnel", get(personnel::get_personnel))
        .with_state(state)
}
