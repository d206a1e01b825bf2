use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Competition {
    pub competition_id: i32,
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    /// Free-form category such as "Outdoor", "Indoor" or "Regional".
    pub kind: String,
}

impl Competition {
    pub fn date_string(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }

    pub fn matches_natural_key(
        &self,
        name: &str,
        date: NaiveDate,
        venue: &str,
        kind: &str,
    ) -> bool {
        self.name == name && self.date == date && self.venue == venue && self.kind == kind
    }
}
