use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::catalog::Discipline;
use crate::dto::{
    ClubStatsRecord, CreateAthleteRequest, CreateClubRequest, CreateCompetitionRequest,
    CreateResultRequest, TopPerformanceRecord, UpdateAthleteRequest,
};
use crate::error::{Result, StorageError};
use crate::gateway::{Gateway, TOP_PER_DISCIPLINE};
use crate::models::{Athlete, Club, Competition, RaceResult};

const SELECT_ATHLETE: &str = "SELECT athlete_id, first_name, last_name, birth_date, gender, \
     COALESCE(is_active, TRUE) AS is_active, club_id FROM athletes";

/// Owns the connection pool; opened once at startup and dropped at
/// shutdown.
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn gateway(&self) -> PgGateway {
        PgGateway::new(self.pool.clone())
    }
}

pub struct PgGateway {
    pool: PgPool,
}

impl PgGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl Gateway for PgGateway {
    async fn athletes(&self) -> Result<Vec<Athlete>> {
        let rows = sqlx::query_as::<_, Athlete>(&format!("{SELECT_ATHLETE} ORDER BY athlete_id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn athlete_by_id(&self, id: i32) -> Result<Option<Athlete>> {
        let row = sqlx::query_as::<_, Athlete>(&format!("{SELECT_ATHLETE} WHERE athlete_id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert_athlete(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        sqlx::query(
            "INSERT INTO athletes (first_name, last_name, birth_date, gender, is_active, club_id) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (first_name, last_name, birth_date, gender, club_id) DO NOTHING",
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.birth_date)
        .bind(&req.gender)
        .bind(req.is_active)
        .bind(req.club_id)
        .execute(&self.pool)
        .await?;

        let athlete = sqlx::query_as::<_, Athlete>(&format!(
            "{SELECT_ATHLETE} WHERE first_name = $1 AND last_name = $2 \
             AND birth_date = $3 AND gender = $4 AND club_id = $5"
        ))
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(req.birth_date)
        .bind(&req.gender)
        .bind(req.club_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(athlete)
    }

    async fn update_athlete(&self, id: i32, patch: &UpdateAthleteRequest) -> Result<Athlete> {
        if patch.is_empty() {
            return Err(StorageError::Validation(
                "at least one field must be supplied".to_string(),
            ));
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE athletes SET ");
        let mut updates = builder.separated(", ");
        if let Some(first_name) = &patch.first_name {
            updates.push("first_name = ").push_bind_unseparated(first_name);
        }
        if let Some(last_name) = &patch.last_name {
            updates.push("last_name = ").push_bind_unseparated(last_name);
        }
        if let Some(birth_date) = patch.birth_date {
            updates.push("birth_date = ").push_bind_unseparated(birth_date);
        }
        if let Some(gender) = &patch.gender {
            updates.push("gender = ").push_bind_unseparated(gender);
        }
        builder.push(" WHERE athlete_id = ").push_bind(id);

        let outcome = builder.build().execute(&self.pool).await?;
        if outcome.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.athlete_by_id(id).await?.ok_or(StorageError::NotFound)
    }

    async fn delete_athlete(&self, id: i32) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM results WHERE athlete_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let outcome = sqlx::query("DELETE FROM athletes WHERE athlete_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        if outcome.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tx.commit().await?;
        Ok(())
    }

    async fn clubs(&self) -> Result<Vec<Club>> {
        let rows =
            sqlx::query_as::<_, Club>("SELECT club_id, name, region_id FROM clubs ORDER BY club_id")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    async fn insert_club(&self, req: &CreateClubRequest) -> Result<Club> {
        sqlx::query(
            "INSERT INTO clubs (name, region_id) VALUES ($1, $2) \
             ON CONFLICT (name, region_id) DO NOTHING",
        )
        .bind(&req.name)
        .bind(req.region_id)
        .execute(&self.pool)
        .await?;

        let club = sqlx::query_as::<_, Club>(
            "SELECT club_id, name, region_id FROM clubs WHERE name = $1 AND region_id = $2",
        )
        .bind(&req.name)
        .bind(req.region_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(club)
    }

    async fn competitions(&self) -> Result<Vec<Competition>> {
        let rows = sqlx::query_as::<_, Competition>(
            "SELECT competition_id, name, date, venue, kind FROM competitions \
             ORDER BY competition_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_competition(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        sqlx::query(
            "INSERT INTO competitions (name, date, venue, kind) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (name, date, venue, kind) DO NOTHING",
        )
        .bind(&req.name)
        .bind(req.date)
        .bind(&req.venue)
        .bind(&req.kind)
        .execute(&self.pool)
        .await?;

        let competition = sqlx::query_as::<_, Competition>(
            "SELECT competition_id, name, date, venue, kind FROM competitions \
             WHERE name = $1 AND date = $2 AND venue = $3 AND kind = $4",
        )
        .bind(&req.name)
        .bind(req.date)
        .bind(&req.venue)
        .bind(&req.kind)
        .fetch_one(&self.pool)
        .await?;

        Ok(competition)
    }

    async fn results(&self) -> Result<Vec<RaceResult>> {
        let rows = sqlx::query_as::<_, RaceResult>(
            "SELECT result_id, athlete_id, competition_id, discipline_id, performance, \
             wind, placement, note FROM results ORDER BY result_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_result(&self, req: &CreateResultRequest) -> Result<RaceResult> {
        sqlx::query(
            "INSERT INTO results (athlete_id, competition_id, discipline_id, performance, \
             wind, placement, note) VALUES ($1, $2, $3, $4, $5, $6, $7) \
             ON CONFLICT (athlete_id, competition_id, discipline_id, performance) DO NOTHING",
        )
        .bind(req.athlete_id)
        .bind(req.competition_id)
        .bind(req.discipline_id)
        .bind(req.performance)
        .bind(req.wind)
        .bind(req.placement)
        .bind(&req.note)
        .execute(&self.pool)
        .await?;

        let result = sqlx::query_as::<_, RaceResult>(
            "SELECT result_id, athlete_id, competition_id, discipline_id, performance, \
             wind, placement, note FROM results \
             WHERE athlete_id = $1 AND competition_id = $2 AND discipline_id = $3 \
             AND performance = $4",
        )
        .bind(req.athlete_id)
        .bind(req.competition_id)
        .bind(req.discipline_id)
        .bind(req.performance)
        .fetch_one(&self.pool)
        .await?;

        Ok(result)
    }

    async fn club_statistics(&self) -> Result<Vec<ClubStatsRecord>> {
        let rows = sqlx::query_as::<_, ClubStatsRecord>(
            "SELECT c.name AS club_name, c.region_id, \
                    COUNT(DISTINCT a.athlete_id) AS athlete_count, \
                    COUNT(r.result_id) AS total_entries, \
                    COUNT(r.result_id) FILTER (WHERE r.placement = 1) AS gold_medals, \
                    MIN(a.birth_date) AS oldest_born, \
                    MAX(a.birth_date) AS youngest_born \
             FROM clubs c \
             LEFT JOIN athletes a ON a.club_id = c.club_id \
             LEFT JOIN results r ON r.athlete_id = a.athlete_id \
             GROUP BY c.club_id, c.name, c.region_id \
             ORDER BY c.club_id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn top_performances(&self) -> Result<Vec<TopPerformanceRecord>> {
        // Timed disciplines rank ascending, everything else descending.
        let ascending = Discipline::lower_is_better_ids();

        let rows = sqlx::query_as::<_, TopPerformanceRecord>(
            "SELECT discipline_id, performance, athlete_name, competition_name, date FROM ( \
                SELECT r.discipline_id, r.performance, \
                       a.first_name || ' ' || a.last_name AS athlete_name, \
                       c.name AS competition_name, c.date, \
                       ROW_NUMBER() OVER ( \
                           PARTITION BY r.discipline_id \
                           ORDER BY CASE WHEN r.discipline_id = ANY($1) \
                                         THEN r.performance ELSE -r.performance END \
                       ) AS rank \
                FROM results r \
                JOIN athletes a ON a.athlete_id = r.athlete_id \
                JOIN competitions c ON c.competition_id = r.competition_id \
             ) ranked WHERE rank <= $2 \
             ORDER BY discipline_id, rank",
        )
        .bind(&ascending)
        .bind(TOP_PER_DISCIPLINE)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
