use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use manoeuvres_game::{catalog::RuleCatalog, eligibility::available_orders};
use manoeuvres_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::GetAvailableOrders},
};

pub struct GetAvailableOrdersHandler {}

impl GetAvailableOrdersHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<GetAvailableOrders> for GetAvailableOrdersHandler {
    #[instrument(skip_all, fields(force_id = %query.force_id))]
    async fn handle(
        &self,
        query: GetAvailableOrders,
        catalog: &dyn RuleCatalog,
        _config: &Arc<Config>,
    ) -> Result<<GetAvailableOrders as Query>::Output, ApplicationError> {
        let orders = available_orders(catalog, query.force_id)?;
        Ok(orders.into_iter().cloned().collect())
    }
}
