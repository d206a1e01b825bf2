use crate::dto::CreateResultRequest;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::models::RaceResult;

pub struct ResultRepository<'a, G: Gateway> {
    gateway: &'a G,
}

impl<'a, G: Gateway> ResultRepository<'a, G> {
    pub fn new(gateway: &'a G) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<RaceResult>> {
        self.gateway.results().await
    }

    pub async fn create(&self, req: &CreateResultRequest) -> Result<RaceResult> {
        validator::Validate::validate(req)?;
        self.gateway.insert_result(req).await
    }
}
