use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    db::Db,
    db::enums::{LeaveDecision, LeaveStatus},
    db::models::api::error_codes,
    db::models::leave::{LeaveInterval, NewLeaveInterval},
    db::repositories::LeavesRepo,
    error::AppError,
    validation::leave::validate_request_leave,
};

pub struct LeavesService;

impl LeavesService {
    pub fn request(
        db: &Db,
        req: &crate::routes::leaves::RequestLeaveRequest,
    ) -> Result<LeaveInterval, AppError> {
        validate_request_leave(req.start_date, req.end_date)?;

        let new_leave = NewLeaveInterval {
            personnel_id: req.personnel_id,
            start_date: req.start_date,
            end_date: req.end_date,
            leave_type_id: req.leave_type_id,
        };
        let created = LeavesRepo::insert(db, new_leave);
        tracing::info!(
            leave_id = %created.id,
            personnel_id = %created.personnel_id,
            "Leave requested"
        );
        Ok(created)
    }

    pub fn get_by_id(db: &Db, leave_id: Uuid) -> Result<LeaveInterval, AppError> {
        LeavesRepo::find_by_id(db, leave_id).ok_or_else(|| AppError::not_found("leave interval"))
    }

    /// Pending -> approved/rejected. Approval re-validates non-overlap against
    /// the person's other approved intervals.
    pub fn decide(
        db: &Db,
        leave_id: Uuid,
        decision: LeaveDecision,
    ) -> Result<LeaveInterval, AppError> {
        let leave = Self::get_by_id(db, leave_id)?;

        if leave.status != LeaveStatus::Pending {
            return Err(AppError::invalid_state(format!(
                "Leave interval is {}, only pending intervals can be decided",
                leave.status
            )));
        }

        let status = match decision {
            LeaveDecision::Approve => {
                let overlapping = LeavesRepo::approved_for_person(db, leave.personnel_id, Some(leave.id))
                    .into_iter()
                    .any(|other| leave.overlaps(&other));
                if overlapping {
                    return Err(AppError::conflict_with_code(
                        "Approved leave already covers part of this range",
                        Some("start_date".to_string()),
                        error_codes::LEAVE_OVERLAP,
                    ));
                }
                LeaveStatus::Approved
            }
            LeaveDecision::Reject => LeaveStatus::Rejected,
        };

        let updated = LeavesRepo::set_status(db, leave_id, status)
            .ok_or_else(|| AppError::not_found("leave interval"))?;
        tracing::info!(leave_id = %leave_id, status = %updated.status, "Leave decided");
        Ok(updated)
    }

    /// Cancellation is the only mutation allowed on an approved interval.
    pub fn cancel(db: &Db, leave_id: Uuid) -> Result<LeaveInterval, AppError> {
        let leave = Self::get_by_id(db, leave_id)?;

        match leave.status {
            LeaveStatus::Pending | LeaveStatus::Approved => {}
            status => {
                return Err(AppError::invalid_state(format!(
                    "Leave interval is {} and cannot be cancelled",
                    status
                )));
            }
        }

        let updated = LeavesRepo::set_status(db, leave_id, LeaveStatus::Cancelled)
            .ok_or_else(|| AppError::not_found("leave interval"))?;
        tracing::info!(leave_id = %leave_id, "Leave cancelled");
        Ok(updated)
    }

    pub fn is_on_leave(db: &Db, personnel_id: Uuid, date: NaiveDate) -> bool {
        LeavesRepo::is_on_leave(db, personnel_id, date)
    }

    pub fn count_on_leave(db: &Db, date: NaiveDate) -> i64 {
        LeavesRepo::count_on_leave(db, date)
    }

    pub fn count_pending(db: &Db) -> i64 {
        LeavesRepo::count_by_status(db, LeaveStatus::Pending)
    }

    pub fn list(
        db: &Db,
        personnel_id: Option<Uuid>,
        status: Option<LeaveStatus>,
    ) -> Vec<LeaveInterval> {
        LeavesRepo::list(db, personnel_id, status)
    }
}
