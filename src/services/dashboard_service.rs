use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    db::Db,
    error::AppError,
    services::leaves_service::LeavesService,
    services::roster::PersonnelRoster,
    services::scheduling_service::SchedulingService,
};

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_personnel: i64,
    pub on_leave_today: i64,
    pub active_shifts: i64,
    pub pending_leaves: i64,
}

pub struct DashboardService;

impl DashboardService {
    /// Read-only composition over the stores as of `date`. No caching; the
    /// caller owns any TTL it wants.
    pub fn stats(
        db: &Db,
        roster: &dyn PersonnelRoster,
        date: NaiveDate,
    ) -> Result<DashboardStats, AppError> {
        Ok(DashboardStats {
            total_personnel: roster.count_all_personnel(),
            on_leave_today: LeavesService::count_on_leave(db, date),
            active_shifts: SchedulingService::active_shift_count(db, date),
            pending_leaves: LeavesService::count_pending(db),
        })
    }
}
