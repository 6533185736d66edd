use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SedgeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error in {path}: {message}")]
    TomlParse { path: PathBuf, message: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    #[error("Unknown filter '{name}' in site config")]
    UnknownFilter { name: String },

    #[error("Unknown collection '{name}' in site config")]
    UnknownCollection { name: String },

    #[error("Config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SedgeError>;
