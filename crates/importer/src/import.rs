//! Bulk JSON import. The container must be a JSON array; anything else is
//! a fatal format error. Individual records are isolated from each other:
//! a bad record is logged and counted, the rest of the file still lands.

use serde_json::Value;

use storage::catalog::{self, Discipline, OTHER_REGION_ID};
use storage::dto::{
    CreateAthleteRequest, CreateClubRequest, CreateCompetitionRequest, CreateResultRequest,
};
use storage::gateway::Gateway;
use storage::models::{Athlete, Competition};
use storage::repository::{
    AthleteRepository, ClubRepository, CompetitionRepository, ResultRepository,
};

use crate::error::{ImporterError, Result};
use crate::records::{AthleteRecord, CompetitionRecord, ResultRecord};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

pub struct BulkImporter<'a, G: Gateway> {
    gateway: &'a G,
}

impl<'a, G: Gateway> BulkImporter<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn import_athletes(&self, json: &str) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        for element in parse_array(json)? {
            match self.import_athlete_record(&element).await {
                Ok(_) => report.imported += 1,
                Err(err) => {
                    tracing::warn!("Skipping athlete record: {err}");
                    report.skipped += 1;
                }
            }
        }
        Ok(report)
    }

    pub async fn import_competitions(&self, json: &str) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        for element in parse_array(json)? {
            match self.import_competition_record(&element).await {
                Ok(_) => report.imported += 1,
                Err(err) => {
                    tracing::warn!("Skipping competition record: {err}");
                    report.skipped += 1;
                }
            }
        }
        Ok(report)
    }

    pub async fn import_results(&self, json: &str) -> Result<ImportReport> {
        let mut report = ImportReport::default();
        for element in parse_array(json)? {
            match self.import_result_record(&element).await {
                Ok(_) => report.imported += 1,
                Err(err) => {
                    tracing::warn!("Skipping result record: {err}");
                    report.skipped += 1;
                }
            }
        }
        Ok(report)
    }

    async fn import_athlete_record(&self, element: &Value) -> Result<Athlete> {
        let record: AthleteRecord = serde_json::from_value(element.clone())?;
        let club = self
            .ensure_club(&record.club_name, &record.club_region)
            .await?;
        let athlete = AthleteRepository::new(self.gateway)
            .create(&CreateAthleteRequest {
                first_name: record.first_name,
                last_name: record.last_name,
                birth_date: record.birth_date,
                gender: record.gender,
                is_active: record.is_active,
                club_id: club.club_id,
            })
            .await?;
        Ok(athlete)
    }

    async fn import_competition_record(&self, element: &Value) -> Result<Competition> {
        let record: CompetitionRecord = serde_json::from_value(element.clone())?;
        let competition = CompetitionRepository::new(self.gateway)
            .create(&CreateCompetitionRequest {
                name: record.name,
                date: record.date,
                venue: record.venue,
                kind: record.kind,
            })
            .await?;
        Ok(competition)
    }

    /// Resolves the whole reference chain for one result row, creating
    /// missing clubs, athletes, and competitions along the way.
    async fn import_result_record(&self, element: &Value) -> Result<()> {
        let record: ResultRecord = serde_json::from_value(element.clone())?;

        let discipline = Discipline::from_friendly_name(&record.discipline_name)
            .ok_or_else(|| ImporterError::UnknownDiscipline(record.discipline_name.clone()))?;

        let club = self
            .ensure_club(&record.club_name, &record.region_name)
            .await?;
        let athlete = AthleteRepository::new(self.gateway)
            .create(&CreateAthleteRequest {
                first_name: record.first_name,
                last_name: record.last_name,
                birth_date: record.birth_date,
                gender: record.gender,
                is_active: true,
                club_id: club.club_id,
            })
            .await?;
        let competition = CompetitionRepository::new(self.gateway)
            .create(&CreateCompetitionRequest {
                name: record.competition_name,
                date: record.competition_date,
                venue: record.competition_venue,
                kind: record.competition_kind,
            })
            .await?;

        ResultRepository::new(self.gateway)
            .create(&CreateResultRequest {
                athlete_id: athlete.athlete_id,
                competition_id: competition.competition_id,
                discipline_id: discipline.id(),
                performance: record.performance,
                wind: record.wind,
                placement: record.placement,
                note: record.note,
            })
            .await?;
        Ok(())
    }

    async fn ensure_club(&self, name: &str, region: &str) -> Result<storage::models::Club> {
        // Unrecognized region names land in the catch-all region.
        let region_id = catalog::region_by_name(region).unwrap_or(OTHER_REGION_ID);
        let club = ClubRepository::new(self.gateway)
            .create(&CreateClubRequest {
                name: name.to_string(),
                region_id,
            })
            .await?;
        Ok(club)
    }
}

fn parse_array(json: &str) -> Result<Vec<Value>> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(elements) => Ok(elements),
        other => Err(ImporterError::InvalidFormat(format!(
            "expected a JSON array at the top level, got {}",
            kind_name(&other)
        ))),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::gateway::MemGateway;

    #[tokio::test]
    async fn athlete_import_isolates_bad_records() {
        let gateway = MemGateway::new();
        let importer = BulkImporter::new(&gateway);

        let json = r#"[
            {"FirstName": "Jana", "LastName": "Nováková", "BirthDate": "2002-03-14",
             "Gender": "F", "ClubName": "Slavia", "ClubRegion": "Hlavní město Praha"},
            {"FirstName": "Karel", "LastName": "Svoboda"},
            {"FirstName": "Eva", "LastName": "Marešová", "BirthDate": "1999-11-02",
             "Gender": "F", "ClubName": "Slavia", "ClubRegion": "Hlavní město Praha"}
        ]"#;

        let report = importer.import_athletes(json).await.unwrap();
        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(gateway.athletes().await.unwrap().len(), 2);

        let clubs = gateway.clubs().await.unwrap();
        assert_eq!(clubs.len(), 1);
        assert_eq!(clubs[0].region_id, 1);
    }

    #[tokio::test]
    async fn non_array_container_is_fatal() {
        let gateway = MemGateway::new();
        let importer = BulkImporter::new(&gateway);

        let err = importer
            .import_athletes(r#"{"FirstName": "Jana"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, ImporterError::InvalidFormat(_)));
    }

    #[tokio::test]
    async fn unknown_region_falls_back_to_the_catch_all() {
        let gateway = MemGateway::new();
        let importer = BulkImporter::new(&gateway);

        let json = r#"[
            {"FirstName": "Tomáš", "LastName": "Beneš", "BirthDate": "2001-06-30",
             "Gender": "M", "ClubName": "AC Vídeň", "ClubRegion": "Wien"}
        ]"#;

        let report = importer.import_athletes(json).await.unwrap();
        assert_eq!(report.imported, 1);

        let clubs = gateway.clubs().await.unwrap();
        assert_eq!(clubs[0].region_id, OTHER_REGION_ID);
    }

    #[tokio::test]
    async fn competition_kind_defaults_to_empty() {
        let gateway = MemGateway::new();
        let importer = BulkImporter::new(&gateway);

        let json = r#"[
            {"Name": "Velká cena", "Date": "2025-09-06", "Venue": "Třebíč"}
        ]"#;

        let report = importer.import_competitions(json).await.unwrap();
        assert_eq!(report.imported, 1);

        let competitions = gateway.competitions().await.unwrap();
        assert_eq!(competitions[0].kind, "");
    }

    #[tokio::test]
    async fn result_import_builds_the_whole_reference_chain() {
        let gateway = MemGateway::new();
        let importer = BulkImporter::new(&gateway);

        let json = r#"[
            {"FirstName": "Adam", "LastName": "Pokorný", "BirthDate": "2000-01-20",
             "Gender": "M", "ClubName": "Dukla", "RegionName": "Hlavní město Praha",
             "CompetitionName": "MČR", "CompetitionDate": "2025-08-02",
             "CompetitionVenue": "Brno", "CompetitionType": "Outdoor",
             "DisciplineName": "100m", "Performance": 10.58,
             "Wind": 1.2, "Placement": 1},
            {"FirstName": "Adam", "LastName": "Pokorný", "BirthDate": "2000-01-20",
             "Gender": "M", "ClubName": "Dukla", "RegionName": "Hlavní město Praha",
             "CompetitionName": "MČR", "CompetitionDate": "2025-08-02",
             "CompetitionVenue": "Brno", "CompetitionType": "Outdoor",
             "DisciplineName": "200m", "Performance": 21.34, "Placement": 2}
        ]"#;

        let report = importer.import_results(json).await.unwrap();
        assert_eq!(report.imported, 2);
        assert_eq!(report.skipped, 0);

        // The shared references deduplicate instead of multiplying.
        assert_eq!(gateway.athletes().await.unwrap().len(), 1);
        assert_eq!(gateway.clubs().await.unwrap().len(), 1);
        assert_eq!(gateway.competitions().await.unwrap().len(), 1);
        assert_eq!(gateway.results().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_discipline_skips_only_that_record() {
        let gateway = MemGateway::new();
        let importer = BulkImporter::new(&gateway);

        let json = r#"[
            {"FirstName": "Adam", "LastName": "Pokorný", "BirthDate": "2000-01-20",
             "Gender": "M", "ClubName": "Dukla", "RegionName": "Hlavní město Praha",
             "CompetitionName": "MČR", "CompetitionDate": "2025-08-02",
             "CompetitionVenue": "Brno", "CompetitionType": "",
             "DisciplineName": "Underwater basket weaving", "Performance": 1.0},
            {"FirstName": "Adam", "LastName": "Pokorný", "BirthDate": "2000-01-20",
             "Gender": "M", "ClubName": "Dukla", "RegionName": "Hlavní město Praha",
             "CompetitionName": "MČR", "CompetitionDate": "2025-08-02",
             "CompetitionVenue": "Brno", "CompetitionType": "",
             "DisciplineName": "Long Jump", "Performance": 7.12}
        ]"#;

        let report = importer.import_results(json).await.unwrap();
        assert_eq!(report.imported, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(gateway.results().await.unwrap().len(), 1);
    }
}
