use quickpoll_errors::AppError;

use super::TallyGateway;
use crate::domain::Tally;

/// Fetches a fresh tally snapshot for the results view. Never cached: every
/// switch into the results view goes back to the service.
pub struct LoadResults<G> {
    gateway: G,
}

impl<G: TallyGateway> LoadResults<G> {
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    pub async fn execute(&self) -> Result<Tally, AppError> {
        let tally = self.gateway.fetch().await?;
        tracing::debug!(choices = tally.len(), total = tally.total(), "tally loaded");
        Ok(tally)
    }
}
