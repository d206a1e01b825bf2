//! Reporting rows. The `*Record` types are what the gateway's two
//! precomputed queries return; the view builder dresses them up into
//! `ClubStats` and `TopPerformanceRow` for display and export.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Raw per-club aggregate as produced by the gateway.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ClubStatsRecord {
    pub club_name: String,
    pub region_id: i32,
    pub athlete_count: i64,
    pub total_entries: i64,
    pub gold_medals: i64,
    pub oldest_born: Option<NaiveDate>,
    pub youngest_born: Option<NaiveDate>,
}

/// Club statistics with display fields resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubStats {
    pub club_name: String,
    pub region_name: String,
    pub athlete_count: i64,
    pub total_entries: i64,
    pub gold_medals: i64,
    pub oldest_born: Option<NaiveDate>,
    pub youngest_born: Option<NaiveDate>,
}

impl ClubStats {
    /// Birth-year span of the club's members, or "-" when unknown.
    pub fn age_range(&self) -> String {
        match (self.oldest_born, self.youngest_born) {
            (Some(oldest), Some(youngest)) => {
                format!("{} - {}", oldest.format("%Y"), youngest.format("%Y"))
            }
            _ => "-".to_string(),
        }
    }
}

/// Raw top-performance row as produced by the gateway.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct TopPerformanceRecord {
    pub discipline_id: i32,
    pub performance: Decimal,
    pub athlete_name: String,
    pub competition_name: String,
    pub date: NaiveDate,
}

/// A top performance ready for display or export; round-trips through
/// JSON without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopPerformanceRow {
    pub discipline_id: i32,
    pub discipline: String,
    pub performance: Decimal,
    pub athlete_name: String,
    pub competition_name: String,
    pub date: NaiveDate,
    pub date_string: String,
    pub formatted_performance: String,
}
