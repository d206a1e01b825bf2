use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Athlete {
    pub athlete_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    /// Added in a later schema revision; legacy rows are read back as active.
    pub is_active: bool,
    pub club_id: i32,
}

impl Athlete {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Birth date in the display convention used throughout the UI layer.
    pub fn birth_date_string(&self) -> String {
        self.birth_date.format("%d.%m.%Y").to_string()
    }

    /// Natural-key equality against a candidate's fields.
    pub fn matches_natural_key(
        &self,
        first_name: &str,
        last_name: &str,
        birth_date: NaiveDate,
        gender: &str,
        club_id: i32,
    ) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.birth_date == birth_date
            && self.gender == gender
            && self.club_id == club_id
    }
}
