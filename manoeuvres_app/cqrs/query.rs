use async_trait::async_trait;
use std::sync::Arc;

use manoeuvres_game::catalog::RuleCatalog;
use manoeuvres_types::errors::ApplicationError;

use crate::config::Config;

/// A marker trait for Query structs.
/// Queries read the rule catalog and never change it.
pub trait Query: Send + Sync {
    /// The data type that this query will return.
    type Output: Send + Sync;
}

/// A trait for handlers that execute Queries against the rule catalog.
#[async_trait]
pub trait QueryHandler<Q: Query> {
    async fn handle(
        &self,
        query: Q,
        catalog: &dyn RuleCatalog,
        config: &Arc<Config>,
    ) -> Result<Q::Output, ApplicationError>;
}
