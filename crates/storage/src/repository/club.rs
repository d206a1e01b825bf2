use crate::dto::CreateClubRequest;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::Club;

pub struct ClubRepository<'a, G: Gateway> {
    gateway: &'a G,
}

impl<'a, G: Gateway> ClubRepository<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Club>> {
        self.gateway.clubs().await
    }

    /// Creates the club unless (name, region) already exists; uniqueness is
    /// an application-level rule backed by the gateway's natural-key index.
    pub async fn create(&self, req: &CreateClubRequest) -> Result<Club> {
        validator::Validate::validate(req)?;
        self.gateway.insert_club(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::MemGateway;

    #[tokio::test]
    async fn same_name_in_different_regions_is_two_clubs() {
        let gateway = MemGateway::new();
        let repo = ClubRepository::new(&gateway);

        let praha = repo
            .create(&CreateClubRequest {
                name: "Sokol".to_string(),
                region_id: 1,
            })
            .await
            .unwrap();
        let brno = repo
            .create(&CreateClubRequest {
                name: "Sokol".to_string(),
                region_id: 11,
            })
            .await
            .unwrap();

        assert_ne!(praha.club_id, brno.club_id);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn duplicate_create_returns_the_existing_club() {
        let gateway = MemGateway::new();
        let repo = ClubRepository::new(&gateway);
        let req = CreateClubRequest {
            name: "AK Olomouc".to_string(),
            region_id: 12,
        };

        let first = repo.create(&req).await.unwrap();
        let second = repo.create(&req).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }
}
