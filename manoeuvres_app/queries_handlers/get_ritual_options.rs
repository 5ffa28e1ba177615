use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use manoeuvres_game::{catalog::RuleCatalog, eligibility::available_force_rituals};
use manoeuvres_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetRitualOptions},
};

pub struct GetRitualOptionsHandler {}

impl GetRitualOptionsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetRitualOptions> for GetRitualOptionsHandler {
    #[instrument(skip_all, fields(force_id = %query.force_id))]
    async fn handle(
        &self,
        query: GetRitualOptions,
        catalog: &dyn RuleCatalog,
        _config: &Arc<Config>,
    ) -> Result<<GetRitualOptions as Query>::Output, ApplicationError> {
        let rituals = available_force_rituals(catalog, query.force_id)?;
        Ok(rituals.into_iter().cloned().collect())
    }
}
