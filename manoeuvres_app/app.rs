use std::sync::Arc;
use tracing::info;

use manoeuvres_game::catalog::RuleCatalog;
use manoeuvres_types::errors::ApplicationError;

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler},
    rules_loader::load_rule_book,
};

/// Central entry point of the application.
///
/// Holds the configuration and the rule catalog snapshot, and dispatches
/// queries to their handlers. The catalog is never modified once loaded.
pub struct App {
    config: Arc<Config>,
    catalog: Arc<dyn RuleCatalog>,
}

impl App {
    pub fn new(config: Arc<Config>, catalog: Arc<dyn RuleCatalog>) -> Self {
        Self { config, catalog }
    }

    /// Builds the app loading the catalog snapshot named by the config.
    pub fn from_config(config: Arc<Config>) -> Result<Self, ApplicationError> {
        let rule_book = load_rule_book(&config.rules_path)?;
        info!(path = %config.rules_path.display(), "Rule catalog loaded");

        Ok(Self::new(config, Arc::new(rule_book)))
    }

    /// Executes a query.
    pub async fn query<Q, H>(&self, query: Q, handler: H) -> Result<Q::Output, ApplicationError>
    where
        Q: Query,
        H: QueryHandler<Q>,
    {
        handler
            .handle(query, self.catalog.as_ref(), &self.config)
            .await
    }
}
