use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use manoeuvres_game::{catalog::RuleCatalog, eligibility::force_options};
use manoeuvres_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetForceOptions},
};

pub struct GetForceOptionsHandler {}

impl GetForceOptionsHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetForceOptions> for GetForceOptionsHandler {
    #[instrument(skip_all, fields(side = %query.side))]
    async fn handle(
        &self,
        query: GetForceOptions,
        catalog: &dyn RuleCatalog,
        _config: &Arc<Config>,
    ) -> Result<<GetForceOptions as Query>::Output, ApplicationError> {
        let forces = force_options(catalog, query.side)?;
        Ok(forces.into_iter().cloned().collect())
    }
}
