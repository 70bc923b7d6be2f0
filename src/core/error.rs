use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThraxaError {
    #[error("Unknown civilization: {0}")]
    UnknownCivilization(crate::core::types::CivId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ThraxaError>;
