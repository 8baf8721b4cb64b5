use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Personnel roster record
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Person {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
}

pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
}

impl Person {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
