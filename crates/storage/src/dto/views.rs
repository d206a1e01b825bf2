//! Flattened projections the view builder produces for the presentation
//! layer. All of them are rebuilt from fresh snapshots on every request
//! and never persisted.

use serde::{Deserialize, Serialize};

use crate::models::{Club, Competition};

/// One row of a per-competition leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionResultView {
    pub discipline_name: String,
    pub athlete_name: String,
    /// Pre-formatted per the discipline's formatting rules.
    pub performance: String,
    pub unit: String,
    /// Missing placements surface as rank 0.
    pub rank: i32,
}

/// One row of the dashboard's recent-results feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentResultView {
    pub athlete_name: String,
    pub discipline_name: String,
    pub performance: String,
    pub date_string: String,
}

/// An athlete listing row with the club name resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AthleteRow {
    pub athlete_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub birth_date_string: String,
    pub gender: String,
    pub club_name: String,
}

/// One club with its member count and resolved region name. Keeps the
/// originating club so detail navigation does not need a second fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClubRosterRow {
    pub club: Club,
    pub athlete_count: i64,
    pub region_name: String,
}

/// Aggregate counts plus the nearest upcoming competition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub athlete_count: i64,
    pub club_count: i64,
    pub competition_count: i64,
    pub next_competition: Option<Competition>,
}
