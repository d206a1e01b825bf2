//! Abstract persistence access. Components receive a gateway explicitly
//! instead of reaching for a process-wide connection; `PgGateway` talks to
//! Postgres, `MemGateway` backs the test suites with the same semantics.

pub mod memory;
pub mod postgres;

use crate::dto::{
    ClubStatsRecord, CreateAthleteRequest, CreateClubRequest, CreateCompetitionRequest,
    CreateResultRequest, TopPerformanceRecord, UpdateAthleteRequest,
};
use crate::error::Result;
use crate::models::{Athlete, Club, Competition, RaceResult};

pub use memory::MemGateway;
pub use postgres::{Database, PgGateway};

/// How many results per discipline the top-performances report keeps.
pub const TOP_PER_DISCIPLINE: i64 = 3;

/// Read/write access to the entity tables plus the two precomputed
/// reporting queries the core consumes but does not compute itself.
///
/// Every insert is an atomic insert-or-return-existing over the entity's
/// natural key: the returned entity always carries a valid generated id,
/// and a candidate matching an existing row returns that row unchanged.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn athletes(&self) -> Result<Vec<Athlete>>;
    async fn athlete_by_id(&self, id: i32) -> Result<Option<Athlete>>;
    async fn insert_athlete(&self, req: &CreateAthleteRequest) -> Result<Athlete>;
    async fn update_athlete(&self, id: i32, patch: &UpdateAthleteRequest) -> Result<Athlete>;
    /// Removes the athlete's results first, then the athlete row, as one
    /// logical operation.
    async fn delete_athlete(&self, id: i32) -> Result<()>;

    async fn clubs(&self) -> Result<Vec<Club>>;
    async fn insert_club(&self, req: &CreateClubRequest) -> Result<Club>;

    async fn competitions(&self) -> Result<Vec<Competition>>;
    async fn insert_competition(&self, req: &CreateCompetitionRequest) -> Result<Competition>;

    async fn results(&self) -> Result<Vec<RaceResult>>;
    async fn insert_result(&self, req: &CreateResultRequest) -> Result<RaceResult>;

    async fn club_statistics(&self) -> Result<Vec<ClubStatsRecord>>;
    async fn top_performances(&self) -> Result<Vec<TopPerformanceRecord>>;
}
