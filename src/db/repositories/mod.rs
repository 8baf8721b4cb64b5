pub mod assignments;
pub mod leaves;
pub mod personnel;
pub mod shifts;

pub use assignments::AssignmentsRepo;
pub use leaves::LeavesRepo;
pub use personnel::PersonnelRepo;
pub use shifts::ShiftsRepo;
