pub mod dashboard_service;
pub mod leaves_service;
pub mod roster;
pub mod scheduling_service;
pub mod shifts_service;

pub use dashboard_service::DashboardService;
pub use leaves_service::LeavesService;
pub use roster::{DirectoryRoster, PersonnelRoster};
pub use scheduling_service::SchedulingService;
pub use shifts_service::ShiftsService;
