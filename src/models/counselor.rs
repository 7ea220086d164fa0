// Counsellor model
// Directory entry; immutable from the calendar's perspective.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counselor {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub specialization: String,
    pub availability: String,
    pub email: String,
    pub phone: String,
}

impl Counselor {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            role: String::new(),
            specialization: String::new(),
            availability: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }
}
