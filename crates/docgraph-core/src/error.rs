use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Language model unavailable: {0}")]
    ParserUnavailable(String),

    #[error("Empty {0} after normalization")]
    EmptyEntity(&'static str),

    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
