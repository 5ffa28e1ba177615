use dotenvy::dotenv;
use std::{env, path::PathBuf, str::FromStr};

use manoeuvres_game::rules::BattleRules;

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the rule catalog snapshot.
    pub rules_path: PathBuf,
    pub battle_rules: BattleRules,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let rules_path = match env::var("MANOEUVRES_RULES_PATH") {
            Ok(val) => PathBuf::from(val),
            Err(_) => PathBuf::from("data/rules.json"),
        };

        let defaults = BattleRules::default();
        let battle_rules = BattleRules {
            normal_break: env_or("MANOEUVRES_NORMAL_BREAK", defaults.normal_break),
            large_break: env_or("MANOEUVRES_LARGE_BREAK", defaults.large_break),
            harsh_normal_break: env_or("MANOEUVRES_HARSH_NORMAL_BREAK", defaults.harsh_normal_break),
            harsh_large_break: env_or("MANOEUVRES_HARSH_LARGE_BREAK", defaults.harsh_large_break),
            fortification_break: env_or(
                "MANOEUVRES_FORTIFICATION_BREAK",
                defaults.fortification_break,
            ),
            decisive_bonus: env_or("MANOEUVRES_DECISIVE_BONUS", defaults.decisive_bonus),
            ..defaults
        };

        Self {
            rules_path,
            battle_rules,
        }
    }
}

/// Reads `key` from the environment, keeping `default` when unset or unparseable.
fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(val) => val.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
