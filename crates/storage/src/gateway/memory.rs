use std::sync::Mutex;

use chrono::NaiveDate;

use crate::catalog::{Discipline, Unit};
use crate::dto::{
    ClubStatsRecord, CreateAthleteRequest, CreateClubRequest, CreateCompetitionRequest,
    CreateResultRequest, TopPerformanceRecord, UpdateAthleteRequest,
};
use crate::error::{Result, StorageError};
use crate::gateway::{Gateway, TOP_PER_DISCIPLINE};
use crate::models::{Athlete, Club, Competition, RaceResult};

/// In-memory gateway with the same insert-or-return-existing semantics as
/// the Postgres implementation. Backs the test suites and fixture setups.
#[derive(Default)]
pub struct MemGateway {
    inner: Mutex<Tables>,
}

#[derive(Default)]
struct Tables {
    athletes: Vec<Athlete>,
    clubs: Vec<Club>,
    competitions: Vec<Competition>,
    results: Vec<RaceResult>,
    next_athlete_id: i32,
    next_club_id: i32,
    next_competition_id: i32,
    next_result_id: i32,
}

impl Tables {
    fn allocate(counter: &mut i32) -> i32 {
        *counter += 1;
        *counter
    }
}

impl MemGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_tables<T>(&self, f: impl FnOnce(&mut Tables) -> T) -> T {
        let mut tables = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut tables)
    }
}

#[async_trait::async_trait]
impl Gateway for MemGateway {
    async fn athletes(&self) -> Result<Vec<Athlete>> {
        Ok(self.with_tables(|t| t.athletes.clone()))
    }

    async fn athlete_by_id(&self, id: i32) -> Result<Option<Athlete>> {
        Ok(self.with_tables(|t| t.athletes.iter().find(|a| a.athlete_id == id).cloned()))
    }

    async fn insert_athlete(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        Ok(self.with_tables(|t| {
            if let Some(existing) = t.athletes.iter().find(|a| {
                a.matches_natural_key(
                    &req.first_name,
                    &req.last_name,
                    req.birth_date,
                    &req.gender,
                    req.club_id,
                )
            }) {
                return existing.clone();
            }
            let athlete = Athlete {
                athlete_id: Tables::allocate(&mut t.next_athlete_id),
                first_name: req.first_name.clone(),
                last_name: req.last_name.clone(),
                birth_date: req.birth_date,
                gender: req.gender.clone(),
                is_active: req.is_active,
                club_id: req.club_id,
            };
            t.athletes.push(athlete.clone());
            athlete
        }))
    }

    async fn update_athlete(&self, id: i32, patch: &UpdateAthleteRequest) -> Result<Athlete> {
        if patch.is_empty() {
            return Err(StorageError::Validation(
                "at least one field must be supplied".to_string(),
            ));
        }
        self.with_tables(|t| {
            let athlete = t
                .athletes
                .iter_mut()
                .find(|a| a.athlete_id == id)
                .ok_or(StorageError::NotFound)?;
            if let Some(first_name) = &patch.first_name {
                athlete.first_name = first_name.clone();
            }
            if let Some(last_name) = &patch.last_name {
                athlete.last_name = last_name.clone();
            }
            if let Some(birth_date) = patch.birth_date {
                athlete.birth_date = birth_date;
            }
            if let Some(gender) = &patch.gender {
                athlete.gender = gender.clone();
            }
            Ok(athlete.clone())
        })
    }

    async fn delete_athlete(&self, id: i32) -> Result<()> {
        self.with_tables(|t| {
            if !t.athletes.iter().any(|a| a.athlete_id == id) {
                return Err(StorageError::NotFound);
            }
            t.results.retain(|r| r.athlete_id != id);
            t.athletes.retain(|a| a.athlete_id != id);
            Ok(())
        })
    }

    async fn clubs(&self) -> Result<Vec<Club>> {
        Ok(self.with_tables(|t| t.clubs.clone()))
    }

    async fn insert_club(&self, req: &CreateClubRequest) -> Result<Club> {
        Ok(self.with_tables(|t| {
            if let Some(existing) = t
                .clubs
                .iter()
                .find(|c| c.matches_natural_key(&req.name, req.region_id))
            {
                return existing.clone();
            }
            let club = Club {
                club_id: Tables::allocate(&mut t.next_club_id),
                name: req.name.clone(),
                region_id: req.region_id,
            };
            t.clubs.push(club.clone());
            club
        }))
    }

    async fn competitions(&self) -> Result<Vec<Competition>> {
        Ok(self.with_tables(|t| t.competitions.clone()))
    }

    async fn insert_competition(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        Ok(self.with_tables(|t| {
            if let Some(existing) = t
                .competitions
                .iter()
                .find(|c| c.matches_natural_key(&req.name, req.date, &req.venue, &req.kind))
            {
                return existing.clone();
            }
            let competition = Competition {
                competition_id: Tables::allocate(&mut t.next_competition_id),
                name: req.name.clone(),
                date: req.date,
                venue: req.venue.clone(),
                kind: req.kind.clone(),
            };
            t.competitions.push(competition.clone());
            competition
        }))
    }

    async fn results(&self) -> Result<Vec<RaceResult>> {
        Ok(self.with_tables(|t| t.results.clone()))
    }

    async fn insert_result(&self, req: &CreateResultRequest) -> Result<RaceResult> {
        Ok(self.with_tables(|t| {
            if let Some(existing) = t.results.iter().find(|r| {
                r.matches_natural_key(
                    req.athlete_id,
                    req.competition_id,
                    req.discipline_id,
                    req.performance,
                )
            }) {
                return existing.clone();
            }
            let result = RaceResult {
                result_id: Tables::allocate(&mut t.next_result_id),
                athlete_id: req.athlete_id,
                competition_id: req.competition_id,
                discipline_id: req.discipline_id,
                performance: req.performance,
                wind: req.wind,
                placement: req.placement,
                note: req.note.clone(),
            };
            t.results.push(result.clone());
            result
        }))
    }

    async fn club_statistics(&self) -> Result<Vec<ClubStatsRecord>> {
        Ok(self.with_tables(|t| {
            t.clubs
                .iter()
                .map(|club| {
                    let members: Vec<&Athlete> = t
                        .athletes
                        .iter()
                        .filter(|a| a.club_id == club.club_id)
                        .collect();
                    let entries: Vec<&RaceResult> = t
                        .results
                        .iter()
                        .filter(|r| members.iter().any(|a| a.athlete_id == r.athlete_id))
                        .collect();
                    ClubStatsRecord {
                        club_name: club.name.clone(),
                        region_id: club.region_id,
                        athlete_count: members.len() as i64,
                        total_entries: entries.len() as i64,
                        gold_medals: entries
                            .iter()
                            .filter(|r| r.placement == Some(1))
                            .count() as i64,
                        oldest_born: members.iter().map(|a| a.birth_date).min(),
                        youngest_born: members.iter().map(|a| a.birth_date).max(),
                    }
                })
                .collect()
        }))
    }

    async fn top_performances(&self) -> Result<Vec<TopPerformanceRecord>> {
        Ok(self.with_tables(|t| {
            let mut discipline_ids: Vec<i32> =
                t.results.iter().map(|r| r.discipline_id).collect();
            discipline_ids.sort_unstable();
            discipline_ids.dedup();

            let mut report = Vec::new();
            for discipline_id in discipline_ids {
                let lower_is_better = Discipline::from_id(discipline_id)
                    .is_some_and(|d| d.unit() == Unit::Seconds);

                let mut entries: Vec<&RaceResult> = t
                    .results
                    .iter()
                    .filter(|r| r.discipline_id == discipline_id)
                    .collect();
                entries.sort_by(|a, b| {
                    if lower_is_better {
                        a.performance.cmp(&b.performance)
                    } else {
                        b.performance.cmp(&a.performance)
                    }
                });

                for result in entries.into_iter().take(TOP_PER_DISCIPLINE as usize) {
                    let athlete_name = t
                        .athletes
                        .iter()
                        .find(|a| a.athlete_id == result.athlete_id)
                        .map(|a| a.full_name())
                        .unwrap_or_default();
                    let (competition_name, date) = t
                        .competitions
                        .iter()
                        .find(|c| c.competition_id == result.competition_id)
                        .map(|c| (c.name.clone(), c.date))
                        .unwrap_or_else(|| (String::new(), NaiveDate::default()));
                    report.push(TopPerformanceRecord {
                        discipline_id,
                        performance: result.performance,
                        athlete_name,
                        competition_name,
                        date,
                    });
                }
            }
            report
        }))
    }
}
