//! Error types for rejected commands and invalid configuration.
//!
//! Nothing here is fatal: a rejected command leaves the simulation untouched.

use thiserror::Error;

/// Reason an operator command was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("no contact with target id {0}")]
    UnknownContact(u32),
    #[error("no polygon or sector with id {0}")]
    UnknownZone(u32),
    #[error("unknown contact status '{0}'")]
    UnknownStatus(String),
    #[error("unknown zone type '{0}'")]
    UnknownZoneKind(String),
    #[error("malformed sector: {0}")]
    MalformedSector(String),
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    #[error("rotation speed must be finite, got {0}")]
    InvalidRotationSpeed(f64),
    #[error("invalid flight: {0}")]
    InvalidFlight(String),
}

/// Reason a [`crate::config::RadarConfig`] failed to load or validate.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
