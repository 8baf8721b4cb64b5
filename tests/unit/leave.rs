use chrono::NaiveDate;
use scheduler_backend::db::Db;
use scheduler_backend::db::enums::{LeaveDecision, LeaveStatus};
use scheduler_backend::error::AppError;
use scheduler_backend::routes::leaves::RequestLeaveRequest;
use scheduler_backend::services::LeavesService;
use uuid::Uuid;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn request(db: &Db, personnel_id: Uuid, start: NaiveDate, end: NaiveDate) -> Result<scheduler_backend::db::models::LeaveInterval, AppError> {
    LeavesService::request(
        db,
        &RequestLeaveRequest {
            personnel_id,
            start_date: start,
            end_date: end,
            leave_type_id: Uuid::new_v4(),
        },
    )
}

#[test]
fn requested_leave_starts_pending() {
    let db = Db::new();
    let leave = request(&db, Uuid::new_v4(), d(2024, 6, 10), d(2024, 6, 12)).unwrap();
    assert_eq!(leave.status, LeaveStatus::Pending);
}

#[test]
fn request_rejects_inverted_range() {
    let db = Db::new();
    assert!(matches!(
        request(&db, Uuid::new_v4(), d(2024, 6, 12), d(2024, 6, 10)),
        Err(AppError::Validation { .. })
    ));
}

#[test]
fn decide_transitions_pending_only() {
    let db = Db::new();
    let person = Uuid::new_v4();
    let leave = request(&db, person, d(2024, 6, 10), d(2024, 6, 12)).unwrap();

    let approved = LeavesService::decide(&db, leave.id, LeaveDecision::Approve).unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);

    // Already decided
    assert!(matches!(
        LeavesService::decide(&db, leave.id, LeaveDecision::Reject),
        Err(AppError::InvalidState { .. })
    ));

    let other = request(&db, person, d(2024, 7, 1), d(2024, 7, 2)).unwrap();
    let rejected = LeavesService::decide(&db, other.id, LeaveDecision::Reject).unwrap();
    assert_eq!(rejected.status, LeaveStatus::Rejected);
}

#[test]
fn approving_overlapping_interval_conflicts() {
    let db = Db::new();
    let person = Uuid::new_v4();

    let first = request(&db, person, d(2024, 6, 10), d(2024, 6, 15)).unwrap();
    LeavesService::decide(&db, first.id, LeaveDecision::Approve).unwrap();

    // Shares 2024-06-15
    let overlapping = request(&db, person, d(2024, 6, 15), d(2024, 6, 20)).unwrap();
    assert!(matches!(
        LeavesService::decide(&db, overlapping.id, LeaveDecision::Approve),
        Err(AppError::Conflict { .. })
    ));

    // Adjacent but disjoint range approves fine
    let disjoint = request(&db, person, d(2024, 6, 16), d(2024, 6, 20)).unwrap();
    let approved = LeavesService::decide(&db, disjoint.id, LeaveDecision::Approve).unwrap();
    assert_eq!(approved.status, LeaveStatus::Approved);
}

#[test]
fn overlap_check_is_per_person() {
    let db = Db::new();
    let first = request(&db, Uuid::new_v4(), d(2024, 6, 10), d(2024, 6, 15)).unwrap();
    LeavesService::decide(&db, first.id, LeaveDecision::Approve).unwrap();

    let other_person = request(&db, Uuid::new_v4(), d(2024, 6, 10), d(2024, 6, 15)).unwrap();
    assert!(LeavesService::decide(&db, other_person.id, LeaveDecision::Approve).is_ok());
}

#[test]
fn cancel_allowed_from_pending_and_approved_only() {
    let db = Db::new();
    let person = Uuid::new_v4();

    let pending = request(&db, person, d(2024, 6, 10), d(2024, 6, 12)).unwrap();
    let cancelled = LeavesService::cancel(&db, pending.id).unwrap();
    assert_eq!(cancelled.status, LeaveStatus::Cancelled);

    let approved = request(&db, person, d(2024, 7, 1), d(2024, 7, 2)).unwrap();
    LeavesService::decide(&db, approved.id, LeaveDecision::Approve).unwrap();
    assert!(LeavesService::cancel(&db, approved.id).is_ok());

    let rejected = request(&db, person, d(2024, 8, 1), d(2024, 8, 2)).unwrap();
    LeavesService::decide(&db, rejected.id, LeaveDecision::Reject).unwrap();
    assert!(matches!(
        LeavesService::cancel(&db, rejected.id),
        Err(AppError::InvalidState { .. })
    ));

    // Cancelling twice is an invalid transition as well
    assert!(matches!(
        LeavesService::cancel(&db, pending.id),
        Err(AppError::InvalidState { .. })
    ));
}

#[test]
fn is_on_leave_covers_inclusive_bounds_of_approved_intervals() {
    let db = Db::new();
    let person = Uuid::new_v4();
    let leave = request(&db, person, d(2024, 6, 10), d(2024, 6, 12)).unwrap();

    // Pending intervals do not count
    assert!(!LeavesService::is_on_leave(&db, person, d(2024, 6, 11)));

    LeavesService::decide(&db, leave.id, LeaveDecision::Approve).unwrap();
    assert!(LeavesService::is_on_leave(&db, person, d(2024, 6, 10)));
    assert!(LeavesService::is_on_leave(&db, person, d(2024, 6, 12)));
    assert!(!LeavesService::is_on_leave(&db, person, d(2024, 6, 9)));
    assert!(!LeavesService::is_on_leave(&db, person, d(2024, 6, 13)));
}

#[test]
fn count_on_leave_counts_distinct_personnel() {
    let db = Db::new();
    let person_a = Uuid::new_v4();
    let person_b = Uuid::new_v4();

    // Two approved intervals for the same person around one date would be an
    // overlap, so give person_a one interval and person_b another.
    let a = request(&db, person_a, d(2024, 6, 10), d(2024, 6, 12)).unwrap();
    LeavesService::decide(&db, a.id, LeaveDecision::Approve).unwrap();
    let b = request(&db, person_b, d(2024, 6, 11), d(2024, 6, 11)).unwrap();
    LeavesService::decide(&db, b.id, LeaveDecision::Approve).unwrap();

    assert_eq!(LeavesService::count_on_leave(&db, d(2024, 6, 11)), 2);
    assert_eq!(LeavesService::count_on_leave(&db, d(2024, 6, 12)), 1);
    assert_eq!(LeavesService::count_on_leave(&db, d(2024, 6, 13)), 0);
}

#[test]
fn list_filters_by_person_and_status() {
    let db = Db::new();
    let person = Uuid::new_v4();
    let first = request(&db, person, d(2024, 6, 10), d(2024, 6, 12)).unwrap();
    request(&db, person, d(2024, 7, 1), d(2024, 7, 2)).unwrap();
    request(&db, Uuid::new_v4(), d(2024, 6, 10), d(2024, 6, 12)).unwrap();
    LeavesService::decide(&db, first.id, LeaveDecision::Approve).unwrap();

    assert_eq!(LeavesService::list(&db, Some(person), None).len(), 2);
    assert_eq!(
        LeavesService::list(&db, Some(person), Some(LeaveStatus::Approved)).len(),
        1
    );
    assert_eq!(
        LeavesService::list(&db, None, Some(LeaveStatus::Pending)).len(),
        2
    );
}
