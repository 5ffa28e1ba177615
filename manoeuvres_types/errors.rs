use thiserror::Error;

pub mod app_error;
pub mod battle_error;

pub use app_error::AppError;
pub use battle_error::{BattleError, ReferenceKind};

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("An unknown error occurred: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ApplicationError {
    fn from(err: anyhow::Error) -> Self {
        ApplicationError::Unknown(format!("{err:#}"))
    }
}
