use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single recorded performance, linking an athlete, a competition and a
/// discipline. The performance value's meaning (seconds, meters, points)
/// depends on the discipline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RaceResult {
    pub result_id: i32,
    pub athlete_id: i32,
    pub competition_id: i32,
    pub discipline_id: i32,
    pub performance: Decimal,
    pub wind: Option<f64>,
    pub placement: Option<i32>,
    pub note: Option<String>,
}

impl RaceResult {
    pub fn matches_natural_key(
        &self,
        athlete_id: i32,
        competition_id: i32,
        discipline_id: i32,
        performance: Decimal,
    ) -> bool {
        self.athlete_id == athlete_id
            && self.competition_id == competition_id
            && self.discipline_id == discipline_id
            && self.performance == performance
    }
}
