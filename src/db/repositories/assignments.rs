use crate::db::Db;
use crate::db::models::assignment::{NewShiftAssignment, ShiftAssignment};
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

pub struct AssignmentsRepo;

impl AssignmentsRepo {
    pub fn insert(db: &Db, new_assignment: NewShiftAssignment) -> ShiftAssignment {
        let assignment = ShiftAssignment {
            id: Uuid::new_v4(),
            personnel_id: new_assignment.personnel_id,
            shift_id: new_assignment.shift_id,
            date: new_assignment.date,
            active: true,
            created_at: chrono::Utc::now(),
        };
        let mut assignments = db.assignments().write().unwrap_or_else(|e| e.into_inner());
        assignments.insert(assignment.id, assignment.clone());
        assignment
    }

    pub fn find_by_id(db: &Db, assignment_id: Uuid) -> Option<ShiftAssignment> {
        let assignments = db.assignments().read().unwrap_or_else(|e| e.into_inner());
        assignments.get(&assignment_id).cloned()
    }

    pub fn set_inactive(db: &Db, assignment_id: Uuid) -> Option<ShiftAssignment> {
        let mut assignments = db.assignments().write().unwrap_or_else(|e| e.into_inner());
        let assignment = assignments.get_mut(&assignment_id)?;
        assignment.active = false;
        Some(assignment.clone())
    }

    /// Active assignments for one person on one date.
    pub fn active_for_person_on(
        db: &Db,
        personnel_id: Uuid,
        date: NaiveDate,
    ) -> Vec<ShiftAssignment> {
        let assignments = db.assignments().read().unwrap_or_else(|e| e.into_inner());
        assignments
            .values()
            .filter(|a| a.active && a.personnel_id == personnel_id && a.date == date)
            .cloned()
            .collect()
    }

    pub fn list(
        db: &Db,
        date: Option<NaiveDate>,
        personnel_id: Option<Uuid>,
        shift_id: Option<Uuid>,
    ) -> Vec<ShiftAssignment> {
        let assignments = db.assignments().read().unwrap_or_else(|e| e.into_inner());
        assignments
            .values()
            .filter(|a| a.active)
            .filter(|a| date.is_none_or(|d| a.date == d))
            .filter(|a| personnel_id.is_none_or(|p| a.personnel_id == p))
            .filter(|a| shift_id.is_none_or(|s| a.shift_id == s))
            .cloned()
            .collect()
    }

    /// Distinct shift ids with at least one active assignment on `date`.
    pub fn distinct_shift_count_on(db: &Db, date: NaiveDate) -> i64 {
        let assignments = db.assignments().read().unwrap_or_else(|e| e.into_inner());
        let shift_ids: HashSet<Uuid> = assignments
            .values()
            .filter(|a| a.active && a.date == date)
            .map(|a| a.shift_id)
            .collect();
        shift_ids.len() as i64
    }

    /// Whether any assignment record, active or not, references the shift.
    pub fn references_shift(db: &Db, shift_id: Uuid) -> bool {
        let assignments = db.assignments().read().unwrap_or_else(|e| e.into_inner());
        assignments.values().any(|a| a.shift_id == shift_id)
    }
}
