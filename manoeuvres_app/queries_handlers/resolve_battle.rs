use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use manoeuvres_game::{battle::Battle, catalog::RuleCatalog};
use manoeuvres_types::{errors::ApplicationError, reports::BattleReport};

use crate::{
    config::Config,
    cqrs::{Query, QueryHandler, queries::ResolveBattle},
};

pub struct ResolveBattleHandler {}

impl ResolveBattleHandler {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl QueryHandler<ResolveBattle> for ResolveBattleHandler {
    #[instrument(skip_all, fields(
        imperial_forces = query.submission.imperial_forces.len(),
        imperial_fortifications = query.submission.imperial_fortifications.len(),
        barbarian_forces = query.submission.barbarian_forces.len(),
        barbarian_fortifications = query.submission.barbarian_fortifications.len(),
    ))]
    async fn handle(
        &self,
        query: ResolveBattle,
        catalog: &dyn RuleCatalog,
        config: &Arc<Config>,
    ) -> Result<<ResolveBattle as Query>::Output, ApplicationError> {
        let submission = query.submission.ingest()?;
        info!("Resolving battle");

        let result = Battle::new(catalog, &config.battle_rules, &submission).resolve()?;
        let report = BattleReport::new(result);
        info!(report_id = %report.id, outcome = %report.result.outcome, "Battle report ready");

        Ok(report)
    }
}
