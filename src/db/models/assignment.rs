use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Shift assignment models
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShiftAssignment {
    pub id: Uuid,
    pub personnel_id: Uuid,
    pub shift_id: Uuid,
    pub date: chrono::NaiveDate,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub struct NewShiftAssignment {
    pub personnel_id: Uuid,
    pub shift_id: Uuid,
    pub date: chrono::NaiveDate,
}

/// Assignment with shift and personnel display fields resolved for lists.
#[derive(Serialize, Clone, Debug)]
pub struct AssignmentView {
    pub id: Uuid,
    pub personnel_id: Uuid,
    pub personnel_name: String,
    pub employee_id: String,
    pub shift_id: Uuid,
    pub shift_name: String,
    pub start_time: Option<chrono::NaiveTime>,
    pub end_time: Option<chrono::NaiveTime>,
    pub date: chrono::NaiveDate,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
