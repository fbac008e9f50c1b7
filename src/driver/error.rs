use thiserror::Error;
use super::types::DriverType;

/// Errors surfaced by driver selection and option parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// Explicitly requested driver is not registered
    #[error("unknown {driver_type} driver '{name}'")]
    UnknownDriver { driver_type: DriverType, name: String },

    /// Every autoprobe candidate failed to start
    #[error(
        "no {driver_type} driver could be started: {}",
        .last_error.as_deref().unwrap_or("no candidates registered")
    )]
    NoDriverAvailable {
        driver_type: DriverType,
        last_error: Option<String>,
    },

    /// Backend refused to start
    #[error("unable to start {driver_type} driver '{name}': {message}")]
    StartFailure {
        driver_type: DriverType,
        name: String,
        message: String,
    },

    #[error("invalid value '{value}' for driver parameter '{name}'")]
    InvalidParameter { name: String, value: String },
}

pub type Result<T> = std::result::Result<T, DriverError>;
