//! Error types for pgconf.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("at least one of POSTGRES_PASSWORD_FILE and POSTGRES_PASSWORD must be set")]
    MissingSecret,

    #[error("password file {} does not exist", path.display())]
    PasswordFileNotFound { path: PathBuf },

    #[error("failed to read password file {}: {source}", path.display())]
    PasswordFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("required environment variable {0} is not set")]
    MissingRequiredField(&'static str),

    #[error("invalid value {value:?} for {name}: {reason}")]
    InvalidField {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("malformed database URI: {0}")]
    MalformedUri(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
