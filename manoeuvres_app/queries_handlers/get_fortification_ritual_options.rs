use async_trait::async_trait;
use std::sync::Arc;

use manoeuvres_game::catalog::RuleCatalog;
use manoeuvres_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetFortificationRitualOptions},
};

pub struct GetFortificationRitualOptionsHandler {}

impl GetFortificationRitualOptionsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetFortificationRitualOptions> for GetFortificationRitualOptionsHandler {
    async fn handle(
        &self,
        _query: GetFortificationRitualOptions,
        catalog: &dyn RuleCatalog,
        _config: &Arc<Config>,
    ) -> Result<<GetFortificationRitualOptions as Query>::Output, ApplicationError> {
        Ok(catalog
            .fortification_rituals()
            .into_iter()
            .cloned()
            .collect())
    }
}
