use thiserror::Error;

#[derive(Debug, Error)]
#[cfg_attr(test, derive(PartialEq))]
pub enum DomainError {
    #[error("Invalid argument: {0} is required")]
    InvalidArgument(&'static str),
}

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to parse request: {0}")]
    Request(#[from] serde_json::Error),

    #[error("Invalid time of day '{0}', expected HH:MM or HH:MM:SS")]
    InvalidTime(String),

    #[error("Invalid pass timestamp '{0}', expected YYYY-MM-DD HH:MM[:SS]")]
    InvalidTimestamp(String),

    #[error("Unknown vehicle type '{0}'")]
    InvalidVehicleType(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
