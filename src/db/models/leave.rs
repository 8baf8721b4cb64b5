use crate::db::enums::LeaveStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Leave interval models
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LeaveInterval {
    pub id: Uuid,
    pub personnel_id: Uuid,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub status: LeaveStatus,
    pub leave_type_id: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub struct NewLeaveInterval {
    pub personnel_id: Uuid,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    pub leave_type_id: Uuid,
}

impl LeaveInterval {
    /// Inclusive date-range containment.
    pub fn contains(&self, date: chrono::NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Inclusive ranges overlap iff neither ends before the other starts.
    pub fn overlaps(&self, other: &LeaveInterval) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }
}
