use crate::db::Db;
use crate::db::enums::LeaveStatus;
use crate::db::models::leave::{LeaveInterval, NewLeaveInterval};
use chrono::NaiveDate;
use std::collections::HashSet;
use uuid::Uuid;

pub struct LeavesRepo;

impl LeavesRepo {
    pub fn insert(db: &Db, new_leave: NewLeaveInterval) -> LeaveInterval {
        let leave = LeaveInterval {
            id: Uuid::new_v4(),
            personnel_id: new_leave.personnel_id,
            start_date: new_leave.start_date,
            end_date: new_leave.end_date,
            status: LeaveStatus::Pending,
            leave_type_id: new_leave.leave_type_id,
            created_at: chrono::Utc::now(),
        };
        let mut leaves = db.leaves().write().unwrap_or_else(|e| e.into_inner());
        leaves.insert(leave.id, leave.clone());
        leave
    }

    pub fn find_by_id(db: &Db, leave_id: Uuid) -> Option<LeaveInterval> {
        let leaves = db.leaves().read().unwrap_or_else(|e| e.into_inner());
        leaves.get(&leave_id).cloned()
    }

    pub fn set_status(db: &Db, leave_id: Uuid, status: LeaveStatus) -> Option<LeaveInterval> {
        let mut leaves = db.leaves().write().unwrap_or_else(|e| e.into_inner());
        let leave = leaves.get_mut(&leave_id)?;
        leave.status = status;
        Some(leave.clone())
    }

    /// Approved intervals belonging to one person, excluding `except`.
    pub fn approved_for_person(
        db: &Db,
        personnel_id: Uuid,
        except: Option<Uuid>,
    ) -> Vec<LeaveInterval> {
        let leaves = db.leaves().read().unwrap_or_else(|e| e.into_inner());
        leaves
            .values()
            .filter(|l| {
                l.personnel_id == personnel_id
                    && l.status == LeaveStatus::Approved
                    && Some(l.id) != except
            })
            .cloned()
            .collect()
    }

    pub fn is_on_leave(db: &Db, personnel_id: Uuid, date: NaiveDate) -> bool {
        let leaves = db.leaves().read().unwrap_or_else(|e| e.into_inner());
        leaves.values().any(|l| {
            l.personnel_id == personnel_id && l.status == LeaveStatus::Approved && l.contains(date)
        })
    }

    /// Distinct personnel with an approved interval containing `date`.
    pub fn count_on_leave(db: &Db, date: NaiveDate) -> i64 {
        let leaves = db.leaves().read().unwrap_or_else(|e| e.into_inner());
        let personnel: HashSet<Uuid> = leaves
            .values()
            .filter(|l| l.status == LeaveStatus::Approved && l.contains(date))
            .map(|l| l.personnel_id)
            .collect();
        personnel.len() as i64
    }

    pub fn count_by_status(db: &Db, status: LeaveStatus) -> i64 {
        let leaves = db.leaves().read().unwrap_or_else(|e| e.into_inner());
        leaves.values().filter(|l| l.status == status).count() as i64
    }

    pub fn list(db: &Db, personnel_id: Option<Uuid>, status: Option<LeaveStatus>) -> Vec<LeaveInterval> {
        let leaves = db.leaves().read().unwrap_or_else(|e| e.into_inner());
        let mut list: Vec<LeaveInterval> = leaves
            .values()
            .filter(|l| personnel_id.is_none_or(|p| l.personnel_id == p))
            .filter(|l| status.is_none_or(|s| l.status == s))
            .cloned()
            .collect();
        list.sort_by(|a, b| (a.start_date, a.created_at).cmp(&(b.start_date, b.created_at)));
        list
    }
}
