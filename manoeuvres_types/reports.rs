use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::battle::ResolutionResult;

/// A resolved battle, as handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleReport {
    pub id: Uuid,
    pub resolved_at: DateTime<Utc>,
    pub result: ResolutionResult,
}

impl BattleReport {
    pub fn new(result: ResolutionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            resolved_at: Utc::now(),
            result,
        }
    }
}
