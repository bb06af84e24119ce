use crate::model::FolderKind;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum StockpileError {
    #[error("Folder not found: {0}")]
    FolderNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Folder name cannot be empty")]
    EmptyName,

    #[error("Nothing to save: the folder is unchanged")]
    NoChanges,

    #[error(
        "This is the last {0} folder; it cannot be deleted or retyped. \
         At least one folder of each type must exist."
    )]
    LastOfType(FolderKind),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, StockpileError>;
