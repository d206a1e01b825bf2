use crate::dto::CreateCompetitionRequest;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::Competition;

pub struct CompetitionRepository<'a, G: Gateway> {
    gateway: &'a G,
}

impl<'a, G: Gateway> CompetitionRepository<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Competition>> {
        self.gateway.competitions().await
    }

    pub async fn create(&self, req: &CreateCompetitionRequest) -> Result<Competition> {
        validator::Validate::validate(req)?;
        self.gateway.insert_competition(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemGateway;
    use chrono::NaiveDate;

    fn meeting(name: &str, day: u32) -> CreateCompetitionRequest {
        CreateCompetitionRequest {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            venue: "Juliska".to_string(),
            kind: "Outdoor".to_string(),
        }
    }

    #[tokio::test]
    async fn duplicate_create_resolves_to_the_existing_competition() {
        let gateway = MemGateway::new();
        let repo = CompetitionRepository::new(&gateway);

        let first = repo.create(&meeting("Memoriál", 7)).await.unwrap();
        let second = repo.create(&meeting("Memoriál", 7)).await.unwrap();

        assert_eq!(first.competition_id, second.competition_id);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn a_different_date_is_a_different_competition() {
        let gateway = MemGateway::new();
        let repo = CompetitionRepository::new(&gateway);

        let first = repo.create(&meeting("Memoriál", 7)).await.unwrap();
        let second = repo.create(&meeting("Memoriál", 8)).await.unwrap();

        assert_ne!(first.competition_id, second.competition_id);
    }
}
