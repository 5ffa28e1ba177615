use async_trait::async_trait;
use std::sync::Arc;

use manoeuvres_game::catalog::RuleCatalog;
use manoeuvres_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetFortificationStrength},
};

pub struct GetFortificationStrengthHandler {}

impl GetFortificationStrengthHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetFortificationStrength> for GetFortificationStrengthHandler {
    async fn handle(
        &self,
        query: GetFortificationStrength,
        catalog: &dyn RuleCatalog,
        _config: &Arc<Config>,
    ) -> Result<<GetFortificationStrength as Query>::Output, ApplicationError> {
        let fortification = catalog.fortification(query.fortification_id)?;
        Ok(fortification.maximum_strength)
    }
}
