use crate::domain::model::MatchId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreboardError {
    #[error("Invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("Match index {index} out of range (board has {len} matches)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("No active match with id {id}")]
    MatchNotFound { id: MatchId },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller passed a value the board rejects.
    Argument,
    /// Caller addressed a match that does not exist.
    Lookup,
    Configuration,
    System,
}

impl ScoreboardError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Argument,
            Self::IndexOutOfRange { .. } | Self::MatchNotFound { .. } => ErrorCategory::Lookup,
            Self::ConfigError { .. } | Self::TomlError(_) => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    pub fn is_index_out_of_range(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, ScoreboardError>;
