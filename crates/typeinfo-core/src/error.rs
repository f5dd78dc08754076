use thiserror::Error;

use crate::naming::QualifiedNameError;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid well-known type configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid type name: {0}")]
    InvalidName(#[from] QualifiedNameError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}
