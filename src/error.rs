use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Not found (status {status})")]
    NotFound { status: u16 },

    #[error("Validation failed (status {status}): {detail}")]
    Validation { status: u16, detail: String },

    #[error("Server error (status {status})")]
    Server { status: u16 },

    #[error("Transport error{}: {message}", fmt_status(.status))]
    Transport { status: Option<u16>, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::NotFound { status }
            | CatalogError::Validation { status, .. }
            | CatalogError::Server { status } => Some(*status),
            CatalogError::Transport { status, .. } => *status,
            CatalogError::InvalidQuery(_) | CatalogError::Decode(_) | CatalogError::Config(_) => {
                None
            }
        }
    }

    /// Errors the editing UI can show next to the offending field.
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::Validation { .. })
    }

    /// Errors the UI should answer with a generic "try again".
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CatalogError::Server { .. } | CatalogError::Transport { .. }
        )
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Transport {
            status: err.status().map(|s| s.as_u16()),
            message: err.to_string(),
        }
    }
}

fn fmt_status(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {})", code),
        None => String::new(),
    }
}
