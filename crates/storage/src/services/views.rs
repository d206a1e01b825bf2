//! Joins the persisted entity sets into UI-ready projections. Every view
//! is materialized from fresh gateway snapshots on each call; nothing is
//! cached or updated incrementally.

use chrono::NaiveDate;

use crate::catalog;
use crate::dto::{
    AthleteRow, ClubRosterRow, ClubStats, CompetitionResultView, DashboardSummary,
    RecentResultView, TopPerformanceRow,
};
use crate::error::Result;
use crate::format::{format_performance_for, friendly_name_for, unit_symbol_for};
use crate::gateway::Gateway;
use crate::models::Competition;

/// Number of rows in the recent-results feed.
const RECENT_FEED_LEN: usize = 10;

const UNKNOWN_ATHLETE: &str = "Unknown Athlete";
const UNKNOWN_CLUB: &str = "Unknown Club";
const UNKNOWN_REGION: &str = "Unknown Region";

pub struct ViewBuilder<'a, G: Gateway> {
    gateway: &'a G,
}

impl<'a, G: Gateway> ViewBuilder<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    /// The ranked result listing for one competition, ordered by discipline
    /// display name and then by rank. A missing placement surfaces as rank
    /// 0; a dangling athlete reference falls back to "Unknown Athlete".
    pub async fn competition_leaderboard(
        &self,
        competition_id: i32,
    ) -> Result<Vec<CompetitionResultView>> {
        let results = self.gateway.results().await?;
        let athletes = self.gateway.athletes().await?;

        let mut rows: Vec<CompetitionResultView> = results
            .iter()
            .filter(|r| r.competition_id == competition_id)
            .map(|r| {
                let athlete_name = athletes
                    .iter()
                    .find(|a| a.athlete_id == r.athlete_id)
                    .map(|a| a.full_name())
                    .unwrap_or_else(|| UNKNOWN_ATHLETE.to_string());
                CompetitionResultView {
                    discipline_name: friendly_name_for(r.discipline_id),
                    athlete_name,
                    performance: format_performance_for(r.discipline_id, r.performance),
                    unit: unit_symbol_for(r.discipline_id).to_string(),
                    rank: r.placement.unwrap_or(0),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            a.discipline_name
                .cmp(&b.discipline_name)
                .then(a.rank.cmp(&b.rank))
        });
        Ok(rows)
    }

    /// The ten most recently stored results, newest first. "Recent" means
    /// highest id, not latest event date.
    pub async fn recent_results(&self) -> Result<Vec<RecentResultView>> {
        let mut results = self.gateway.results().await?;
        let athletes = self.gateway.athletes().await?;
        let competitions = self.gateway.competitions().await?;

        results.sort_by(|a, b| b.result_id.cmp(&a.result_id));

        let rows = results
            .iter()
            .take(RECENT_FEED_LEN)
            .map(|r| {
                let athlete_name = athletes
                    .iter()
                    .find(|a| a.athlete_id == r.athlete_id)
                    .map(|a| a.full_name())
                    .unwrap_or_else(|| "Unknown".to_string());
                let date_string = competitions
                    .iter()
                    .find(|c| c.competition_id == r.competition_id)
                    .map(|c| c.date_string())
                    .unwrap_or_else(|| "-".to_string());
                RecentResultView {
                    athlete_name,
                    discipline_name: friendly_name_for(r.discipline_id),
                    performance: format_performance_for(r.discipline_id, r.performance),
                    date_string,
                }
            })
            .collect();
        Ok(rows)
    }

    /// Every athlete with its club name resolved.
    pub async fn athletes(&self) -> Result<Vec<AthleteRow>> {
        let athletes = self.gateway.athletes().await?;
        let clubs = self.gateway.clubs().await?;

        let rows = athletes
            .iter()
            .map(|a| {
                let club_name = clubs
                    .iter()
                    .find(|c| c.club_id == a.club_id)
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNKNOWN_CLUB.to_string());
                AthleteRow {
                    athlete_id: a.athlete_id,
                    first_name: a.first_name.clone(),
                    last_name: a.last_name.clone(),
                    birth_date_string: a.birth_date_string(),
                    gender: a.gender.clone(),
                    club_name,
                }
            })
            .collect();
        Ok(rows)
    }

    /// Every club with its member count and region name, in catalog order.
    pub async fn club_roster(&self) -> Result<Vec<ClubRosterRow>> {
        let clubs = self.gateway.clubs().await?;
        let athletes = self.gateway.athletes().await?;

        let rows = clubs
            .into_iter()
            .map(|club| {
                let athlete_count =
                    athletes.iter().filter(|a| a.club_id == club.club_id).count() as i64;
                let region_name = catalog::region_name(club.region_id)
                    .unwrap_or(UNKNOWN_REGION)
                    .to_string();
                ClubRosterRow {
                    club,
                    athlete_count,
                    region_name,
                }
            })
            .collect();
        Ok(rows)
    }

    /// Entity counts plus the nearest upcoming competition.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let athletes = self.gateway.athletes().await?;
        let clubs = self.gateway.clubs().await?;
        let competitions = self.gateway.competitions().await?;

        let today = chrono::Local::now().date_naive();
        Ok(DashboardSummary {
            athlete_count: athletes.len() as i64,
            club_count: clubs.len() as i64,
            competition_count: competitions.len() as i64,
            next_competition: next_competition_on(&competitions, today),
        })
    }

    /// Per-club aggregate report, dressed up with region display names.
    pub async fn club_statistics(&self) -> Result<Vec<ClubStats>> {
        let records = self.gateway.club_statistics().await?;
        Ok(records
            .into_iter()
            .map(|r| ClubStats {
                club_name: r.club_name,
                region_name: catalog::region_name(r.region_id)
                    .unwrap_or(UNKNOWN_REGION)
                    .to_string(),
                athlete_count: r.athlete_count,
                total_entries: r.total_entries,
                gold_medals: r.gold_medals,
                oldest_born: r.oldest_born,
                youngest_born: r.youngest_born,
            })
            .collect())
    }

    /// The best results per discipline, ready for display or export.
    pub async fn top_performances(&self) -> Result<Vec<TopPerformanceRow>> {
        let records = self.gateway.top_performances().await?;
        Ok(records
            .into_iter()
            .map(|r| {
                let formatted = format_performance_for(r.discipline_id, r.performance);
                let unit = unit_symbol_for(r.discipline_id);
                TopPerformanceRow {
                    discipline_id: r.discipline_id,
                    discipline: friendly_name_for(r.discipline_id),
                    performance: r.performance,
                    athlete_name: r.athlete_name,
                    competition_name: r.competition_name,
                    date_string: r.date.format("%d.%m.%Y").to_string(),
                    date: r.date,
                    formatted_performance: format!("{formatted} {unit}").trim_end().to_string(),
                }
            })
            .collect())
    }
}

/// Earliest competition on or after `today`; ties resolve to the first in
/// catalog order.
pub fn next_competition_on(competitions: &[Competition], today: NaiveDate) -> Option<Competition> {
    competitions
        .iter()
        .filter(|c| c.date >= today)
        .min_by_key(|c| c.date)
        .cloned()
}

/// The club with the most athletes; ties resolve to the first in catalog
/// order.
pub fn top_club(rows: &[ClubRosterRow]) -> Option<&ClubRosterRow> {
    rows.iter()
        .reduce(|best, row| if row.athlete_count > best.athlete_count { row } else { best })
}

/// Case-insensitive substring filter over competition name and venue.
/// Returns a new list; the input is never mutated.
pub fn filter_competitions(competitions: &[Competition], filter: &str) -> Vec<Competition> {
    let needle = filter.to_lowercase();
    competitions
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle) || c.venue.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Case-insensitive substring filter over club name and region name.
pub fn filter_club_roster(rows: &[ClubRosterRow], filter: &str) -> Vec<ClubRosterRow> {
    let needle = filter.to_lowercase();
    rows.iter()
        .filter(|r| {
            r.club.name.to_lowercase().contains(&needle)
                || r.region_name.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Discipline;
    use crate::dto::{
        CreateAthleteRequest, CreateClubRequest, CreateCompetitionRequest, CreateResultRequest,
    };
    use crate::gateway::MemGateway;
    use crate::models::Club;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    async fn seed_club(gateway: &MemGateway, name: &str, region_id: i32) -> i32 {
        gateway
            .insert_club(&CreateClubRequest {
                name: name.to_string(),
                region_id,
            })
            .await
            .unwrap()
            .club_id
    }

    async fn seed_athlete(gateway: &MemGateway, first: &str, last: &str, club_id: i32) -> i32 {
        gateway
            .insert_athlete(&CreateAthleteRequest {
                first_name: first.to_string(),
                last_name: last.to_string(),
                birth_date: NaiveDate::from_ymd_opt(2000, 1, 15).unwrap(),
                gender: "F".to_string(),
                is_active: true,
                club_id,
            })
            .await
            .unwrap()
            .athlete_id
    }

    async fn seed_competition(gateway: &MemGateway, name: &str, date: NaiveDate) -> i32 {
        gateway
            .insert_competition(&CreateCompetitionRequest {
                name: name.to_string(),
                date,
                venue: "Stadion Evžena Rošického".to_string(),
                kind: "Outdoor".to_string(),
            })
            .await
            .unwrap()
            .competition_id
    }

    async fn seed_result(
        gateway: &MemGateway,
        athlete_id: i32,
        competition_id: i32,
        discipline: Discipline,
        performance: Decimal,
        placement: Option<i32>,
    ) {
        gateway
            .insert_result(&CreateResultRequest {
                athlete_id,
                competition_id,
                discipline_id: discipline.id(),
                performance,
                wind: None,
                placement,
                note: None,
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn leaderboard_orders_by_discipline_name_then_rank() {
        let gateway = MemGateway::new();
        let club = seed_club(&gateway, "Slavia", 1).await;
        let athlete = seed_athlete(&gateway, "Marie", "Horáková", club).await;
        let comp =
            seed_competition(&gateway, "Krajský přebor", NaiveDate::from_ymd_opt(2025, 5, 10).unwrap())
                .await;

        // 100m is discipline A, 200m discipline B by display name.
        seed_result(&gateway, athlete, comp, Discipline::Run100m, dec("12.10"), Some(2)).await;
        seed_result(&gateway, athlete, comp, Discipline::Run100m, dec("12.02"), Some(1)).await;
        seed_result(&gateway, athlete, comp, Discipline::Run200m, dec("24.80"), Some(1)).await;

        let board = ViewBuilder::new(&gateway)
            .competition_leaderboard(comp)
            .await
            .unwrap();

        let order: Vec<(&str, i32)> = board
            .iter()
            .map(|r| (r.discipline_name.as_str(), r.rank))
            .collect();
        assert_eq!(order, vec![("100m", 1), ("100m", 2), ("200m", 1)]);
    }

    #[tokio::test]
    async fn leaderboard_falls_back_for_unknown_athlete_and_missing_rank() {
        let gateway = MemGateway::new();
        let comp =
            seed_competition(&gateway, "Mítink", NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()).await;
        seed_result(&gateway, 99, comp, Discipline::LongJump, dec("620"), None).await;

        let board = ViewBuilder::new(&gateway)
            .competition_leaderboard(comp)
            .await
            .unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].athlete_name, "Unknown Athlete");
        assert_eq!(board[0].rank, 0);
        assert_eq!(board[0].performance, "6.20");
        assert_eq!(board[0].unit, "m");
    }

    #[tokio::test]
    async fn recent_feed_takes_ten_highest_ids_newest_first() {
        let gateway = MemGateway::new();
        let club = seed_club(&gateway, "Sparta", 1).await;
        let athlete = seed_athlete(&gateway, "Lucie", "Malá", club).await;
        let comp =
            seed_competition(&gateway, "Halové MČR", NaiveDate::from_ymd_opt(2025, 2, 22).unwrap())
                .await;

        for i in 0..12 {
            seed_result(
                &gateway,
                athlete,
                comp,
                Discipline::Run60m,
                dec("7.20") + Decimal::new(i, 2),
                None,
            )
            .await;
        }

        let feed = ViewBuilder::new(&gateway).recent_results().await.unwrap();
        assert_eq!(feed.len(), 10);
        // Highest id first means the last-inserted performance leads.
        assert_eq!(feed[0].performance, "7.31");
        assert_eq!(feed[0].date_string, "22.02.2025");
        assert_eq!(feed[0].athlete_name, "Lucie Malá");
    }

    #[tokio::test]
    async fn recent_feed_uses_fallbacks_for_dangling_references() {
        let gateway = MemGateway::new();
        seed_result(&gateway, 7, 9, Discipline::Run100m, dec("11.00"), None).await;

        let feed = ViewBuilder::new(&gateway).recent_results().await.unwrap();
        assert_eq!(feed[0].athlete_name, "Unknown");
        assert_eq!(feed[0].date_string, "-");
    }

    #[tokio::test]
    async fn top_club_breaks_ties_by_catalog_order() {
        let gateway = MemGateway::new();
        let small = seed_club(&gateway, "Malý klub", 3).await;
        let first_big = seed_club(&gateway, "První velký", 1).await;
        let second_big = seed_club(&gateway, "Druhý velký", 2).await;

        for i in 0..3 {
            seed_athlete(&gateway, "A", &format!("S{i}"), small).await;
        }
        for i in 0..7 {
            seed_athlete(&gateway, "B", &format!("F{i}"), first_big).await;
        }
        for i in 0..7 {
            seed_athlete(&gateway, "C", &format!("G{i}"), second_big).await;
        }

        let roster = ViewBuilder::new(&gateway).club_roster().await.unwrap();
        let counts: Vec<i64> = roster.iter().map(|r| r.athlete_count).collect();
        assert_eq!(counts, vec![3, 7, 7]);

        let top = top_club(&roster).unwrap();
        assert_eq!(top.club.club_id, first_big);
    }

    #[tokio::test]
    async fn dashboard_picks_earliest_future_competition() {
        let gateway = MemGateway::new();
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        seed_competition(&gateway, "Minulý", NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()).await;
        seed_competition(&gateway, "Pozdější", NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()).await;
        seed_competition(&gateway, "Nejbližší", NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).await;
        seed_competition(&gateway, "Stejný den", NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).await;

        let competitions = gateway.competitions().await.unwrap();
        let next = next_competition_on(&competitions, today).unwrap();
        assert_eq!(next.name, "Nejbližší");

        let none = next_competition_on(&competitions, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(none.is_none());
    }

    #[tokio::test]
    async fn filters_match_case_insensitively_and_do_not_mutate() {
        let competitions = vec![
            Competition {
                competition_id: 1,
                name: "Zlatá tretra".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 6, 24).unwrap(),
                venue: "Ostrava".to_string(),
                kind: "Outdoor".to_string(),
            },
            Competition {
                competition_id: 2,
                name: "Memoriál Josefa Odložila".to_string(),
                date: NaiveDate::from_ymd_opt(2025, 6, 9).unwrap(),
                venue: "Praha".to_string(),
                kind: "Outdoor".to_string(),
            },
        ];

        let hits = filter_competitions(&competitions, "OSTRAVA");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Zlatá tretra");
        assert_eq!(competitions.len(), 2);

        let roster = vec![ClubRosterRow {
            club: Club {
                club_id: 1,
                name: "AK Škoda".to_string(),
                region_id: 4,
            },
            athlete_count: 12,
            region_name: "Plzeňský kraj".to_string(),
        }];
        assert_eq!(filter_club_roster(&roster, "plzeň").len(), 1);
        assert!(filter_club_roster(&roster, "brno").is_empty());
    }

    #[tokio::test]
    async fn club_statistics_resolve_region_names() {
        let gateway = MemGateway::new();
        let club = seed_club(&gateway, "TJ Vysočina", 10).await;
        let athlete = seed_athlete(&gateway, "Iva", "Krejčí", club).await;
        let comp =
            seed_competition(&gateway, "Okresní kolo", NaiveDate::from_ymd_opt(2025, 4, 5).unwrap())
                .await;
        seed_result(&gateway, athlete, comp, Discipline::ShotPut, dec("14.22"), Some(1)).await;

        let stats = ViewBuilder::new(&gateway).club_statistics().await.unwrap();
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].region_name, "Kraj Vysočina");
        assert_eq!(stats[0].athlete_count, 1);
        assert_eq!(stats[0].total_entries, 1);
        assert_eq!(stats[0].gold_medals, 1);
        assert_eq!(stats[0].age_range(), "2000 - 2000");
    }

    #[tokio::test]
    async fn top_performances_format_value_and_unit() {
        let gateway = MemGateway::new();
        let club = seed_club(&gateway, "USK", 1).await;
        let athlete = seed_athlete(&gateway, "Tereza", "Veselá", club).await;
        let comp =
            seed_competition(&gateway, "MČR", NaiveDate::from_ymd_opt(2025, 8, 2).unwrap()).await;
        seed_result(&gateway, athlete, comp, Discipline::Run800m, dec("125"), Some(1)).await;

        let rows = ViewBuilder::new(&gateway).top_performances().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].discipline, "800m");
        assert_eq!(rows[0].formatted_performance, "2:05.00 s");
        assert_eq!(rows[0].date_string, "02.08.2025");
    }
}
