use std::{path::PathBuf, sync::Arc};

use manoeuvres_game::{rules::BattleRules, test_utils::rule_book_factory};

use crate::{app::App, config::Config};

pub fn config_factory() -> Config {
    Config {
        rules_path: PathBuf::from("data/rules.json"),
        battle_rules: BattleRules::default(),
    }
}

/// An app backed by the in-memory test rule book.
pub fn app_factory() -> App {
    App::new(Arc::new(config_factory()), Arc::new(rule_book_factory()))
}
