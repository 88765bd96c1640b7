use serde::{Deserialize, Serialize};

/// A roster entry, as read from `Member List.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "ID", alias = "id")]
    pub id: i64,
    #[serde(rename = "Full Name", alias = "full_name", alias = "name")]
    pub full_name: String,
    #[serde(rename = "Grade", alias = "grade")]
    pub grade: i64,
}

impl Member {
    pub fn new(id: i64, full_name: &str, grade: i64) -> Self {
        Self {
            id,
            full_name: full_name.trim().to_string(),
            grade,
        }
    }

    /// `(surname, given)`: the first word is the given name, the rest the surname.
    /// A single-word name is treated as a surname with an empty given name.
    pub fn surname_given(&self) -> (&str, &str) {
        match self.full_name.split_once(' ') {
            Some((given, surname)) => (surname.trim(), given),
            None => (self.full_name.as_str(), ""),
        }
    }

    /// Newcomers are identified by a configured sentinel grade.
    pub fn is_new(&self, new_member_grade: i64) -> bool {
        self.grade == new_member_grade
    }
}
