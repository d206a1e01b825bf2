use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Club {
    pub club_id: i32,
    pub name: String,
    /// References the static region catalog, not a database table.
    pub region_id: i32,
}

impl Club {
    pub fn matches_natural_key(&self, name: &str, region_id: i32) -> bool {
        self.name == name && self.region_id == region_id
    }
}
