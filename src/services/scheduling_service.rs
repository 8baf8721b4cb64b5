use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    db::Db,
    db::models::api::error_codes,
    db::models::assignment::{AssignmentView, NewShiftAssignment, ShiftAssignment},
    db::repositories::{AssignmentsRepo, ShiftsRepo},
    error::AppError,
    services::leaves_service::LeavesService,
    services::roster::PersonnelRoster,
};

/// Single mutation entry point for shift assignments. The conflict check is
/// interval overlap on the shift time windows, not shift-id equality; two
/// differently named shifts can still share hours.
pub struct SchedulingService;

impl SchedulingService {
    pub fn assign(
        db: &Db,
        roster: &dyn PersonnelRoster,
        today: NaiveDate,
        personnel_id: Uuid,
        shift_id: Uuid,
        date: NaiveDate,
    ) -> Result<ShiftAssignment, AppError> {
        let shift =
            ShiftsRepo::find_by_id(db, shift_id).ok_or_else(|| AppError::not_found("shift"))?;
        if !shift.active {
            return Err(AppError::InactiveShift { shift_id });
        }
        let window = shift
            .window()
            .ok_or_else(|| AppError::internal("Active shift has no time window"))?;

        let _person = roster
            .get_person(personnel_id)
            .ok_or_else(|| AppError::not_found("personnel"))?;

        if date < today {
            return Err(AppError::PastDate { date });
        }

        if LeavesService::is_on_leave(db, personnel_id, date) {
            return Err(AppError::OnLeave { personnel_id, date });
        }

        // Overlap check and insert must be atomic per (personnel, date).
        let key_lock = db.assignment_key_lock(personnel_id, date);
        let _guard = key_lock.lock().unwrap_or_else(|e| e.into_inner());

        for existing in AssignmentsRepo::active_for_person_on(db, personnel_id, date) {
            let existing_window = ShiftsRepo::find_by_id(db, existing.shift_id)
                .and_then(|s| s.window());
            if let Some(existing_window) = existing_window {
                if window.overlaps(&existing_window) {
                    return Err(AppError::conflict_with_code(
                        format!(
                            "Personnel already has an overlapping assignment on {}",
                            date
                        ),
                        Some("shift_id".to_string()),
                        error_codes::SCHEDULE_DOUBLE_BOOKING,
                    ));
                }
            }
        }

        let created = AssignmentsRepo::insert(
            db,
            NewShiftAssignment {
                personnel_id,
                shift_id,
                date,
            },
        );
        tracing::info!(
            assignment_id = %created.id,
            personnel_id = %personnel_id,
            shift_id = %shift_id,
            date = %date,
            "Shift assigned"
        );
        Ok(created)
    }

    /// Soft removal. Idempotent on an already-inactive assignment; an id that
    /// never existed is a not-found.
    pub fn unassign(db: &Db, assignment_id: Uuid) -> Result<ShiftAssignment, AppError> {
        let _existing = AssignmentsRepo::find_by_id(db, assignment_id)
            .ok_or_else(|| AppError::not_found("assignment"))?;

        let updated = AssignmentsRepo::set_inactive(db, assignment_id)
            .ok_or_else(|| AppError::not_found("assignment"))?;
        tracing::info!(assignment_id = %assignment_id, "Shift unassigned");
        Ok(updated)
    }

    /// Active assignments with display fields resolved, ordered by date then
    /// personnel display name.
    pub fn list(
        db: &Db,
        roster: &dyn PersonnelRoster,
        date: Option<NaiveDate>,
        personnel_id: Option<Uuid>,
        shift_id: Option<Uuid>,
    ) -> Vec<AssignmentView> {
        let assignments = AssignmentsRepo::list(db, date, personnel_id, shift_id);
        let mut views: Vec<AssignmentView> = assignments
            .into_iter()
            .map(|a| {
                let shift = ShiftsRepo::find_by_id(db, a.shift_id);
                let person = roster.get_person(a.personnel_id);
                AssignmentView {
                    id: a.id,
                    personnel_id: a.personnel_id,
                    personnel_name: person
                        .as_ref()
                        .map(|p| p.display_name())
                        .unwrap_or_else(|| "Unknown".to_string()),
                    employee_id: person.map(|p| p.employee_id).unwrap_or_default(),
                    shift_id: a.shift_id,
                    shift_name: shift.as_ref().map(|s| s.name.clone()).unwrap_or_default(),
                    start_time: shift.as_ref().and_then(|s| s.start_time),
                    end_time: shift.and_then(|s| s.end_time),
                    date: a.date,
                    created_at: a.created_at,
                }
            })
            .collect();
        views.sort_by(|a, b| {
            (a.date, a.personnel_name.as_str()).cmp(&(b.date, b.personnel_name.as_str()))
        });
        views
    }

    /// Distinct shift definitions with at least one active assignment on the
    /// date. Two people on the same shift count once.
    pub fn active_shift_count(db: &Db, date: NaiveDate) -> i64 {
        AssignmentsRepo::distinct_shift_count_on(db, date)
    }
}
