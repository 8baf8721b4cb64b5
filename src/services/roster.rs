use crate::db::Db;
use crate::db::models::person::Person;
use crate::db::repositories::PersonnelRepo;
use uuid::Uuid;

/// Personnel roster collaborator. The scheduling core only needs to resolve
/// a person for display and referential checks, and to count headcount for
/// the dashboard; the full personnel administration lives elsewhere.
pub trait PersonnelRoster: Send + Sync {
    fn get_person(&self, person_id: Uuid) -> Option<Person>;
    fn count_all_personnel(&self) -> i64;
}

/// Roster backed by the local personnel directory table.
#[derive(Clone)]
pub struct DirectoryRoster {
    db: Db,
}

impl DirectoryRoster {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

impl PersonnelRoster for DirectoryRoster {
    fn get_person(&self, person_id: Uuid) -> Option<Person> {
        PersonnelRepo::find_by_id(&self.db, person_id)
    }

    fn count_all_personnel(&self) -> i64 {
        PersonnelRepo::count(&self.db)
    }
}
