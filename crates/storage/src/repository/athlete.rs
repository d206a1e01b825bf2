use crate::dto::{CreateAthleteRequest, UpdateAthleteRequest};
use crate::error::{Result, StorageError};
use crate::gateway::Gateway;
use crate::models::Athlete;

pub struct AthleteRepository<'a, G: Gateway> {
    gateway: &'a G,
}

impl<'a, G: Gateway> AthleteRepository<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn get(&self, id: i32) -> Result<Athlete> {
        self.gateway
            .athlete_by_id(id)
            .await?
            .ok_or(StorageError::NotFound)
    }

    pub async fn list(&self) -> Result<Vec<Athlete>> {
        self.gateway.athletes().await
    }

    /// Creates the athlete unless one with the same natural key exists, in
    /// which case the existing athlete is returned unchanged.
    pub async fn create(&self, req: &CreateAthleteRequest) -> Result<Athlete> {
        validator::Validate::validate(req)?;
        self.gateway.insert_athlete(req).await
    }

    /// Applies a sparse update. An update supplying no fields is rejected
    /// before any persistence attempt.
    pub async fn update(&self, id: i32, patch: &UpdateAthleteRequest) -> Result<Athlete> {
        if patch.is_empty() {
            return Err(StorageError::Validation(
                "at least one field must be supplied".to_string(),
            ));
        }
        validator::Validate::validate(patch)?;
        self.gateway.update_athlete(id, patch).await
    }

    /// Deletes the athlete and every result referencing it, as one logical
    /// operation.
    pub async fn delete(&self, id: i32) -> Result<()> {
        self.gateway.delete_athlete(id).await
    }
}
