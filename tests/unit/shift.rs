use chrono::NaiveTime;
use scheduler_backend::db::Db;
use scheduler_backend::db::models::NewPerson;
use scheduler_backend::db::repositories::PersonnelRepo;
use scheduler_backend::error::AppError;
use scheduler_backend::routes::shifts::CreateShiftRequest;
use scheduler_backend::services::{DirectoryRoster, SchedulingService, ShiftsService};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn create(db: &Db, name: &str, start: Option<NaiveTime>, end: Option<NaiveTime>) -> Result<scheduler_backend::db::models::Shift, AppError> {
    ShiftsService::create(
        db,
        &CreateShiftRequest {
            name: name.to_string(),
            description: None,
            start_time: start,
            end_time: end,
        },
    )
}

#[test]
fn create_shift_with_both_times_is_active() {
    let db = Db::new();
    let shift = create(&db, "Morning", Some(t(8, 0)), Some(t(16, 0))).unwrap();
    assert!(shift.active);
    assert_eq!(shift.working_hours(), Some(8.0));
}

#[test]
fn create_shift_without_times_is_inactive_draft() {
    let db = Db::new();
    let shift = create(&db, "Draft", None, None).unwrap();
    assert!(!shift.active);
    assert_eq!(shift.working_hours(), None);
}

#[test]
fn create_shift_rejects_empty_name_and_half_open_window() {
    let db = Db::new();
    assert!(matches!(
        create(&db, "  ", Some(t(8, 0)), Some(t(16, 0))),
        Err(AppError::Validation { .. })
    ));
    assert!(matches!(
        create(&db, "Morning", Some(t(8, 0)), None),
        Err(AppError::Validation { .. })
    ));
    assert!(matches!(
        create(&db, "Morning", None, Some(t(16, 0))),
        Err(AppError::Validation { .. })
    ));
    assert!(matches!(
        create(&db, "Morning", Some(t(8, 0)), Some(t(8, 0))),
        Err(AppError::Validation { .. })
    ));
}

#[test]
fn deactivate_is_idempotent_and_nondestructive() {
    let db = Db::new();
    let shift = create(&db, "Morning", Some(t(8, 0)), Some(t(16, 0))).unwrap();

    let first = ShiftsService::deactivate(&db, shift.id).unwrap();
    assert!(!first.active);
    let second = ShiftsService::deactivate(&db, shift.id).unwrap();
    assert!(!second.active);

    // Still retrievable as a historical record
    assert_eq!(ShiftsService::get_by_id(&db, shift.id).unwrap().id, shift.id);
}

#[test]
fn deactivate_unknown_shift_is_not_found() {
    let db = Db::new();
    assert!(matches!(
        ShiftsService::deactivate(&db, uuid::Uuid::new_v4()),
        Err(AppError::NotFound { .. })
    ));
}

#[test]
fn active_list_is_ordered_by_name_and_excludes_inactive() {
    let db = Db::new();
    create(&db, "Night", Some(t(22, 0)), Some(t(6, 0))).unwrap();
    create(&db, "Evening", Some(t(16, 0)), Some(t(0, 0))).unwrap();
    let morning = create(&db, "Morning", Some(t(8, 0)), Some(t(16, 0))).unwrap();
    ShiftsService::deactivate(&db, morning.id).unwrap();

    let names: Vec<String> = ShiftsService::list(&db, false)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Evening", "Night"]);

    let all: Vec<String> = ShiftsService::list(&db, true)
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(all, vec!["Evening", "Morning", "Night"]);
}

#[test]
fn hard_delete_blocked_while_assignments_reference_the_shift() {
    let db = Db::new();
    let roster = DirectoryRoster::new(db.clone());
    let shift = create(&db, "Morning", Some(t(8, 0)), Some(t(16, 0))).unwrap();
    let person = PersonnelRepo::insert(
        &db,
        NewPerson {
            first_name: "Ayse".to_string(),
            last_name: "Yilmaz".to_string(),
            employee_id: "P-1001".to_string(),
        },
    );

    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let assignment =
        SchedulingService::assign(&db, &roster, today, person.id, shift.id, date).unwrap();

    assert!(matches!(
        ShiftsService::delete(&db, shift.id),
        Err(AppError::Conflict { .. })
    ));

    // Soft-removing the assignment still blocks deletion; the record remains
    SchedulingService::unassign(&db, assignment.id).unwrap();
    assert!(matches!(
        ShiftsService::delete(&db, shift.id),
        Err(AppError::Conflict { .. })
    ));
}

#[test]
fn hard_delete_allowed_when_unreferenced() {
    let db = Db::new();
    let shift = create(&db, "Morning", Some(t(8, 0)), Some(t(16, 0))).unwrap();
    ShiftsService::delete(&db, shift.id).unwrap();
    assert!(matches!(
        ShiftsService::get_by_id(&db, shift.id),
        Err(AppError::NotFound { .. })
    ));
}
