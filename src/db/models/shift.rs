use crate::utils::TimeWindow;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Shift definition models
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Shift {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub start_time: Option<chrono::NaiveTime>,
    pub end_time: Option<chrono::NaiveTime>,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub struct NewShift {
    pub name: String,
    pub description: Option<String>,
    pub start_time: Option<chrono::NaiveTime>,
    pub end_time: Option<chrono::NaiveTime>,
}

impl Shift {
    /// Wall-clock window of the shift, if both times are set.
    pub fn window(&self) -> Option<TimeWindow> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(TimeWindow::new(start, end)),
            _ => None,
        }
    }

    pub fn working_hours(&self) -> Option<f64> {
        self.window().map(|w| w.duration_hours())
    }
}
