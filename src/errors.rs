use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Spotify authentication failed: {0}")]
    Authentication(String),

    #[error("Failed to fetch {resource}: {reason}")]
    Fetch { resource: String, reason: String },

    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ChartError {
    pub fn fetch(resource: impl Into<String>, reason: impl ToString) -> Self {
        ChartError::Fetch {
            resource: resource.into(),
            reason: reason.to_string(),
        }
    }
}
