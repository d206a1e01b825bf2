pub mod athlete;
pub mod club;
pub mod competition;
pub mod reports;
pub mod result;
pub mod views;

pub use athlete::{CreateAthleteRequest, UpdateAthleteRequest};
pub use club::CreateClubRequest;
pub use competition::CreateCompetitionRequest;
pub use reports::{ClubStats, ClubStatsRecord, TopPerformanceRecord, TopPerformanceRow};
pub use result::CreateResultRequest;
pub use views::{
    AthleteRow, ClubRosterRow, CompetitionResultView, DashboardSummary, RecentResultView,
};
