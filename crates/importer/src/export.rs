//! JSON export of the top-performances report, pretty-printed so the
//! files stay hand-editable.

use std::path::Path;

use storage::dto::TopPerformanceRow;

use crate::error::Result;

pub fn to_pretty_json(rows: &[TopPerformanceRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

pub async fn write_top_performances(path: &Path, rows: &[TopPerformanceRow]) -> Result<()> {
    let json = to_pretty_json(rows)?;
    tokio::fs::write(path, json).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn export_round_trips_through_json() {
        let rows = vec![TopPerformanceRow {
            discipline_id: 10,
            discipline: "800m".to_string(),
            performance: Decimal::from_str("125").unwrap(),
            athlete_name: "Tereza Veselá".to_string(),
            competition_name: "MČR".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 8, 2).unwrap(),
            date_string: "02.08.2025".to_string(),
            formatted_performance: "2:05.00 s".to_string(),
        }];

        let json = to_pretty_json(&rows).unwrap();
        assert!(json.contains("\"formatted_performance\": \"2:05.00 s\""));

        let back: Vec<TopPerformanceRow> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rows);
    }
}
