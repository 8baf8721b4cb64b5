use crate::db::Db;
use crate::db::models::person::{NewPerson, Person};
use uuid::Uuid;

pub struct PersonnelRepo;

impl PersonnelRepo {
    pub fn insert(db: &Db, new_person: NewPerson) -> Person {
        let person = Person {
            id: Uuid::new_v4(),
            first_name: new_person.first_name,
            last_name: new_person.last_name,
            employee_id: new_person.employee_id,
        };
        let mut personnel = db.personnel().write().unwrap_or_else(|e| e.into_inner());
        personnel.insert(person.id, person.clone());
        person
    }

    pub fn find_by_id(db: &Db, person_id: Uuid) -> Option<Person> {
        let personnel = db.personnel().read().unwrap_or_else(|e| e.into_inner());
        personnel.get(&person_id).cloned()
    }

    pub fn list(db: &Db) -> Vec<Person> {
        let personnel = db.personnel().read().unwrap_or_else(|e| e.into_inner());
        let mut list: Vec<Person> = personnel.values().cloned().collect();
        list.sort_by(|a, b| {
            (a.last_name.as_str(), a.first_name.as_str())
                .cmp(&(b.last_name.as_str(), b.first_name.as_str()))
        });
        list
    }

    pub fn count(db: &Db) -> i64 {
        let personnel = db.personnel().read().unwrap_or_else(|e| e.into_inner());
        personnel.len() as i64
    }
}
