pub mod enums;
pub mod models;
pub mod repositories;

use chrono::NaiveDate;
use models::{LeaveInterval, Person, Shift, ShiftAssignment};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};
use uuid::Uuid;

/// Shared in-memory store. Cloning is cheap; all clones see the same tables.
///
/// The storage contract is deliberately narrow so a durable backend can be
/// slotted in behind the repositories without touching the services.
#[derive(Clone, Default)]
pub struct Db {
    inner: Arc<DbInner>,
}

#[derive(Default)]
struct DbInner {
    shifts: RwLock<HashMap<Uuid, Shift>>,
    leaves: RwLock<HashMap<Uuid, LeaveInterval>>,
    assignments: RwLock<HashMap<Uuid, ShiftAssignment>>,
    personnel: RwLock<HashMap<Uuid, Person>>,
    // Serializes check-then-act on assignment writes per (personnel, date).
    assign_locks: Mutex<HashMap<(Uuid, NaiveDate), Arc<Mutex<()>>>>,
}

impl Db {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn shifts(&self) -> &RwLock<HashMap<Uuid, Shift>> {
        &self.inner.shifts
    }

    pub(crate) fn leaves(&self) -> &RwLock<HashMap<Uuid, LeaveInterval>> {
        &self.inner.leaves
    }

    pub(crate) fn assignments(&self) -> &RwLock<HashMap<Uuid, ShiftAssignment>> {
        &self.inner.assignments
    }

    pub(crate) fn personnel(&self) -> &RwLock<HashMap<Uuid, Person>> {
        &self.inner.personnel
    }

    /// Lock guarding assignment writes for one (personnel, date) key.
    ///
    /// The guard must be held across the overlap check and the insert;
    /// two concurrent assigns for the same key would otherwise both pass
    /// the check against a stale view and double-book.
    pub fn assignment_key_lock(&self, personnel_id: Uuid, date: NaiveDate) -> Arc<Mutex<()>> {
        let mut locks = self
            .inner
            .assign_locks
            .lock()
            .unwrap_or_else(|e| e.into_inner());
        locks
            .entry((personnel_id, date))
            .or_default()
            .clone()
    }
}
