use anyhow::Context;
use clap::Parser;
use std::{
    io::{self, Read},
    path::PathBuf,
    sync::Arc,
};
use tracing::info;

use manoeuvres_app::{
    app::App, config::Config, cqrs::queries::ResolveBattle,
    queries_handlers::ResolveBattleHandler, submission::RawBattleSubmission,
};
use manoeuvres_types::errors::ApplicationError;

mod logs;
use logs::setup_logging;

#[derive(Parser)]
#[command(version, about = "Resolve a battle between the Empire and the barbarians")]
struct Cli {
    /// Battle submission (JSON). Read from stdin when omitted.
    submission: Option<PathBuf>,
    /// Rule catalog snapshot, overriding MANOEUVRES_RULES_PATH.
    #[arg(long)]
    rules: Option<PathBuf>,
    /// Pretty-print the battle report.
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<(), ApplicationError> {
    setup_logging();
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(rules) = cli.rules {
        config.rules_path = rules;
    }
    let app = App::from_config(Arc::new(config))?;

    let submission = read_submission(cli.submission.as_ref())?;
    let report = app
        .query(ResolveBattle { submission }, ResolveBattleHandler::new())
        .await?;
    info!(report_id = %report.id, "Battle resolved");

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}

fn read_submission(path: Option<&PathBuf>) -> anyhow::Result<RawBattleSubmission> {
    let json = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading battle submission {}", path.display()))?,
        None => {
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("reading battle submission from stdin")?;
            json
        }
    };

    serde_json::from_str(&json).context("parsing battle submission")
}
