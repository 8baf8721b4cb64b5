use chrono::{NaiveDate, NaiveTime};
use scheduler_backend::db::Db;
use scheduler_backend::db::enums::LeaveDecision;
use scheduler_backend::db::models::{NewPerson, NewShift};
use scheduler_backend::db::repositories::{PersonnelRepo, ShiftsRepo};
use scheduler_backend::routes::leaves::RequestLeaveRequest;
use scheduler_backend::services::dashboard_service::DashboardStats;
use scheduler_backend::services::{DashboardService, DirectoryRoster, LeavesService, SchedulingService};
use uuid::Uuid;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn stats_on_empty_store_are_all_zero() {
    let db = Db::new();
    let roster = DirectoryRoster::new(db.clone());
    let stats = DashboardService::stats(&db, &roster, d(2024, 6, 10)).unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            total_personnel: 0,
            on_leave_today: 0,
            active_shifts: 0,
            pending_leaves: 0,
        }
    );
}

#[test]
fn stats_compose_roster_leave_and_schedule_figures() {
    let db = Db::new();
    let roster = DirectoryRoster::new(db.clone());
    let today = d(2024, 6, 1);
    let date = d(2024, 6, 10);

    // 10 personnel
    let people: Vec<Uuid> = (0..10)
        .map(|i| {
            PersonnelRepo::insert(
                &db,
                NewPerson {
                    first_name: format!("First{}", i),
                    last_name: format!("Last{}", i),
                    employee_id: format!("P-10{:02}", i),
                },
            )
            .id
        })
        .collect();

    // 2 approved leaves covering the date
    for person in &people[..2] {
        let leave = LeavesService::request(
            &db,
            &RequestLeaveRequest {
                personnel_id: *person,
                start_date: d(2024, 6, 9),
                end_date: d(2024, 6, 11),
                leave_type_id: Uuid::new_v4(),
            },
        )
        .unwrap();
        LeavesService::decide(&db, leave.id, LeaveDecision::Approve).unwrap();
    }

    // 1 pending request
    LeavesService::request(
        &db,
        &RequestLeaveRequest {
            personnel_id: people[2],
            start_date: d(2024, 7, 1),
            end_date: d(2024, 7, 5),
            leave_type_id: Uuid::new_v4(),
        },
    )
    .unwrap();

    // 3 distinct shifts assigned, one of them twice
    let shifts: Vec<Uuid> = [
        ("Morning", t(8, 0), t(16, 0)),
        ("Evening", t(16, 0), t(0, 0)),
        ("Night", t(22, 0), t(6, 0)),
    ]
    .into_iter()
    .map(|(name, start, end)| {
        ShiftsRepo::insert(
            &db,
            NewShift {
                name: name.to_string(),
                description: None,
                start_time: Some(start),
                end_time: Some(end),
            },
            true,
        )
        .id
    })
    .collect();

    SchedulingService::assign(&db, &roster, today, people[3], shifts[0], date).unwrap();
    SchedulingService::assign(&db, &roster, today, people[4], shifts[0], date).unwrap();
    SchedulingService::assign(&db, &roster, today, people[5], shifts[1], date).unwrap();
    SchedulingService::assign(&db, &roster, today, people[6], shifts[2], date).unwrap();

    let stats = DashboardService::stats(&db, &roster, date).unwrap();
    assert_eq!(
        stats,
        DashboardStats {
            total_personnel: 10,
            on_leave_today: 2,
            active_shifts: 3,
            pending_leaves: 1,
        }
    );

    // A different date sees the same roster but none of the day figures
    let elsewhere = DashboardService::stats(&db, &roster, d(2024, 6, 20)).unwrap();
    assert_eq!(elsewhere.total_personnel, 10);
    assert_eq!(elsewhere.on_leave_today, 0);
    assert_eq!(elsewhere.active_shifts, 0);
    assert_eq!(elsewhere.pending_leaves, 1);
}

#[test]
fn stats_follow_unassign_immediately() {
    let db = Db::new();
    let roster = DirectoryRoster::new(db.clone());
    let today = d(2024, 6, 1);
    let date = d(2024, 6, 10);

    let person = PersonnelRepo::insert(
        &db,
        NewPerson {
            first_name: "Ayse".to_string(),
            last_name: "Yilmaz".to_string(),
            employee_id: "P-1001".to_string(),
        },
    );
    let shift = ShiftsRepo::insert(
        &db,
        NewShift {
            name: "Morning".to_string(),
            description: None,
            start_time: Some(t(8, 0)),
            end_time: Some(t(16, 0)),
        },
        true,
    );

    let assignment =
        SchedulingService::assign(&db, &roster, today, person.id, shift.id, date).unwrap();
    assert_eq!(
        DashboardService::stats(&db, &roster, date).unwrap().active_shifts,
        1
    );

    SchedulingService::unassign(&db, assignment.id).unwrap();
    assert_eq!(
        DashboardService::stats(&db, &roster, date).unwrap().active_shifts,
        0
    );
}
