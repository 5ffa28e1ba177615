use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use manoeuvres_game::{catalog::RuleCatalog, eligibility::fortification_options};
use manoeuvres_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetFortificationOptions},
};

pub struct GetFortificationOptionsHandler {}

impl GetFortificationOptionsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetFortificationOptions> for GetFortificationOptionsHandler {
    #[instrument(skip_all, fields(side = %query.side))]
    async fn handle(
        &self,
        query: GetFortificationOptions,
        catalog: &dyn RuleCatalog,
        _config: &Arc<Config>,
    ) -> Result<<GetFortificationOptions as Query>::Output, ApplicationError> {
        Ok(fortification_options(catalog, query.side)
            .into_iter()
            .cloned()
            .collect())
    }
}
