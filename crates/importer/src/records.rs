//! Wire shapes for the JSON interchange files. Field names are
//! PascalCase to stay compatible with files produced by earlier exports.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

fn default_active() -> bool {
    true
}

fn default_kind() -> String {
    String::new()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AthleteRecord {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub club_name: String,
    pub club_region: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompetitionRecord {
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    #[serde(rename = "Type", default = "default_kind")]
    pub kind: String,
}

/// A fully self-describing result row. The importer resolves every
/// referenced entity by natural key, creating it on first sight.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResultRecord {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub club_name: String,
    pub region_name: String,
    pub competition_name: String,
    pub competition_date: NaiveDate,
    pub competition_venue: String,
    #[serde(rename = "CompetitionType", default = "default_kind")]
    pub competition_kind: String,
    pub discipline_name: String,
    pub performance: Decimal,
    #[serde(default)]
    pub wind: Option<f64>,
    #[serde(default)]
    pub placement: Option<i32>,
    #[serde(default)]
    pub note: Option<String>,
}
