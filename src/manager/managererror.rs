use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors raised while loading locations and calendars into registries.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error("i/o error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("json parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("key '{0}' defined more than once")]
    DuplicateNameError(String),

    #[error("invalid holiday '{name}': {reason}")]
    InvalidHolidayError {
        name: String,
        reason: String
    },

    #[error("invalid location '{name}': {reason}")]
    InvalidLocationError {
        name: String,
        reason: String
    }
}

impl ManagerError {
    pub fn invalid_holiday(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidHolidayError { name: name.to_owned(), reason: reason.into() }
    }

    pub fn invalid_location(name: &str, reason: impl Into<String>) -> ManagerError {
        ManagerError::InvalidLocationError { name: name.to_owned(), reason: reason.into() }
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
where
    T: DeserializeOwned
{
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}
