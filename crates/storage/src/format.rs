//! Performance formatting. Pure and total: any (discipline id, value)
//! pair produces a display string, falling back to plain two-decimal
//! output for ids the catalog does not know.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::catalog::{Discipline, FormatClass, Unit};

/// Formats a raw performance value for a known discipline.
///
/// Duration events interpret the value as elapsed seconds and render
/// `M:SS.ff`, switching to `H:MM:SS` from one hour up. Jump and vault
/// events keep the historical convention that values above 30 were
/// entered in centimeters and divide by 100 before rendering.
/// Everything else renders two decimals.
pub fn format_performance(discipline: Discipline, value: Decimal) -> String {
    match discipline.format_class() {
        FormatClass::Duration => format_duration(value),
        FormatClass::JumpHeuristic => {
            if value > Decimal::from(30) {
                two_decimals(value / Decimal::from(100))
            } else {
                two_decimals(value)
            }
        }
        FormatClass::Plain => two_decimals(value),
    }
}

/// Id-based variant used by the view builder; unrecognized ids fall back
/// to plain two-decimal output.
pub fn format_performance_for(discipline_id: i32, value: Decimal) -> String {
    match Discipline::from_id(discipline_id) {
        Some(d) => format_performance(d, value),
        None => two_decimals(value),
    }
}

/// Unit suffix for a discipline id; empty for unrecognized ids.
pub fn unit_symbol_for(discipline_id: i32) -> &'static str {
    match Discipline::from_id(discipline_id) {
        Some(d) => d.unit().symbol(),
        None => Unit::None.symbol(),
    }
}

/// Display name for a discipline id; unmapped ids fall back to the raw
/// identifier.
pub fn friendly_name_for(discipline_id: i32) -> String {
    match Discipline::from_id(discipline_id) {
        Some(d) => d.friendly_name().to_string(),
        None => discipline_id.to_string(),
    }
}

fn format_duration(seconds: Decimal) -> String {
    let total_centis = (seconds * Decimal::from(100))
        .trunc()
        .to_i64()
        .unwrap_or(0)
        .max(0);
    let total_seconds = total_centis / 100;

    if total_seconds >= 3600 {
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let secs = total_seconds % 60;
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        let minutes = total_seconds / 60;
        let secs = total_seconds % 60;
        let centis = total_centis % 100;
        format!("{}:{:02}.{:02}", minutes, secs, centis)
    }
}

fn two_decimals(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(
        2,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(2);
    rounded.to_string()
}
