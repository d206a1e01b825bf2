use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a club. (name, region) is the natural key; the
/// region id must come from the static region catalog.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 255, message = "Club name is required"))]
    pub name: String,

    pub region_id: i32,
}
