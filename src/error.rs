use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeadError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("input is empty: paste or pipe some company notes")]
    EmptyInput,

    #[error("no companies detected in the text, check the format")]
    NoCompaniesDetected,

    #[error("company not found: {name}")]
    CompanyNotFound { name: String },

    #[error("refusing to clear all data without --yes")]
    ConfirmationRequired,
}

pub type Result<T> = std::result::Result<T, LeadError>;
