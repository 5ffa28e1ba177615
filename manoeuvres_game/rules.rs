use serde::{Deserialize, Serialize};

/// Tunable constants of the battle rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleRules {
    /// Strength below which a normal force is destroyed.
    pub normal_break: i64,
    /// Strength below which a large force is destroyed.
    pub large_break: i64,
    /// Break thresholds when the opposing side fights with a harsh order.
    pub harsh_normal_break: i64,
    pub harsh_large_break: i64,
    pub fortification_break: i64,
    /// Victory contribution added by a decisive ritual.
    pub decisive_bonus: f64,
    /// Casualty modifier granted by each ally with a casualty boosting order.
    pub ally_casualty_bonus: f64,
    /// Casualty suffered reduction granted by an ally with a mercy order.
    pub mercy_reduction: f64,
    /// Extra casualties suffered by besieged barbarian fortifications.
    pub siege_bonus: f64,
    /// Cap on the bonus victory points of cross-order bonuses.
    pub cross_order_bonus_cap: u32,
    /// Contribution margin worth one victory point.
    pub victory_point_divisor: i64,
}

impl Default for BattleRules {
    fn default() -> Self {
        Self {
            normal_break: 1000,
            large_break: 1250,
            harsh_normal_break: 1500,
            harsh_large_break: 2250,
            fortification_break: 1000,
            decisive_bonus: 2000.0,
            ally_casualty_bonus: 0.1,
            mercy_reduction: 0.1,
            siege_bonus: 0.3,
            cross_order_bonus_cap: 5,
            victory_point_divisor: 1000,
        }
    }
}

impl BattleRules {
    /// Returns the break threshold for a force.
    pub fn force_break(&self, large: bool, harsh: bool) -> i64 {
        match (large, harsh) {
            (false, false) => self.normal_break,
            (true, false) => self.large_break,
            (false, true) => self.harsh_normal_break,
            (true, true) => self.harsh_large_break,
        }
    }
}
