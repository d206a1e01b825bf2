use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for creating a new athlete. Creation is idempotent over the
/// natural key (first name, last name, birth date, gender, club).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAthleteRequest {
    #[validate(length(min = 1, max = 255, message = "First name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 255, message = "Last name is required"))]
    pub last_name: String,

    pub birth_date: NaiveDate,

    #[validate(custom(function = validate_gender))]
    pub gender: String,

    #[serde(default = "default_active")]
    pub is_active: bool,

    pub club_id: i32,
}

/// Sparse update of an athlete; only the supplied fields are modified.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAthleteRequest {
    #[validate(length(min = 1, max = 255))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub last_name: Option<String>,

    pub birth_date: Option<NaiveDate>,

    #[validate(custom(function = validate_gender_opt))]
    pub gender: Option<String>,
}

impl UpdateAthleteRequest {
    /// An update carrying no fields is rejected before it reaches storage.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.birth_date.is_none()
            && self.gender.is_none()
    }
}

fn default_active() -> bool {
    true
}

const VALID_GENDERS: &[&str] = &["M", "F"];

fn validate_gender(gender: &str) -> Result<(), validator::ValidationError> {
    if VALID_GENDERS.contains(&gender) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_gender"))
    }
}

fn validate_gender_opt(gender: &String) -> Result<(), validator::ValidationError> {
    validate_gender(gender)
}
