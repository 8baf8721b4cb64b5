use crate::db::Db;
use crate::db::models::shift::{NewShift, Shift};
use uuid::Uuid;

pub struct ShiftsRepo;

impl ShiftsRepo {
    pub fn insert(db: &Db, new_shift: NewShift, active: bool) -> Shift {
        let shift = Shift {
            id: Uuid::new_v4(),
            name: new_shift.name,
            description: new_shift.description,
            start_time: new_shift.start_time,
            end_time: new_shift.end_time,
            active,
            created_at: chrono::Utc::now(),
        };
        let mut shifts = db.shifts().write().unwrap_or_else(|e| e.into_inner());
        shifts.insert(shift.id, shift.clone());
        shift
    }

    pub fn find_by_id(db: &Db, shift_id: Uuid) -> Option<Shift> {
        let shifts = db.shifts().read().unwrap_or_else(|e| e.into_inner());
        shifts.get(&shift_id).cloned()
    }

    /// Active shifts ordered by name.
    pub fn list_active(db: &Db) -> Vec<Shift> {
        let shifts = db.shifts().read().unwrap_or_else(|e| e.into_inner());
        let mut list: Vec<Shift> = shifts.values().filter(|s| s.active).cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    pub fn list_all(db: &Db) -> Vec<Shift> {
        let shifts = db.shifts().read().unwrap_or_else(|e| e.into_inner());
        let mut list: Vec<Shift> = shifts.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    pub fn set_inactive(db: &Db, shift_id: Uuid) -> Option<Shift> {
        let mut shifts = db.shifts().write().unwrap_or_else(|e| e.into_inner());
        let shift = shifts.get_mut(&shift_id)?;
        shift.active = false;
        Some(shift.clone())
    }

    pub fn delete_by_id(db: &Db, shift_id: Uuid) -> bool {
        let mut shifts = db.shifts().write().unwrap_or_else(|e| e.into_inner());
        shifts.remove(&shift_id).is_some()
    }
}
