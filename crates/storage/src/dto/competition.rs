use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a competition; (name, date, venue, kind) is the
/// natural key.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCompetitionRequest {
    #[validate(length(min = 1, max = 255, message = "Competition name is required"))]
    pub name: String,

    pub date: NaiveDate,

    #[validate(length(min = 1, max = 255, message = "Venue is required"))]
    pub venue: String,

    #[serde(default)]
    pub kind: String,
}
