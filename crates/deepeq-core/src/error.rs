//! Error types for value conversion

use thiserror::Error;

/// Result type for value conversions
pub type ValueResult<T> = Result<T, ValueError>;

/// Errors that can occur while converting data into a [`Value`](crate::Value)
#[derive(Debug, Error)]
pub enum ValueError {
    /// The type's `Serialize` impl failed or produced something JSON cannot hold
    #[error("failed to serialize value: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

impl From<serde_json::Error> for ValueError {
    fn from(source: serde_json::Error) -> Self {
        ValueError::Serialize { source }
    }
}
