pub mod api;
pub mod assignment;
pub mod leave;
pub mod person;
pub mod shift;

pub use api::{ApiResponse, ErrorDetail, ResponseMeta};
pub use assignment::{AssignmentView, NewShiftAssignment, ShiftAssignment};
pub use leave::{LeaveInterval, NewLeaveInterval};
pub use person::{NewPerson, Person};
pub use shift::{NewShift, Shift};
