use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for recording a performance; (athlete, competition, discipline,
/// performance) is the natural key.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateResultRequest {
    pub athlete_id: i32,
    pub competition_id: i32,
    pub discipline_id: i32,
    pub performance: Decimal,
    pub wind: Option<f64>,

    #[validate(range(min = 1, message = "Placement must be a positive rank"))]
    pub placement: Option<i32>,

    pub note: Option<String>,
}
