use thiserror::Error;

pub type Result<T> = std::result::Result<T, SecretError>;

#[derive(Debug, Error)]
pub enum SecretError {
    #[error("not found")]
    NotFound,

    #[error("invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    #[error("{0}")]
    Client(String),

    #[error("unable to reach Secrets Manager: {0}")]
    Transport(String),

    #[error("unable to assume role {role_arn}: {reason}")]
    AssumeRole { role_arn: String, reason: String },
}

impl SecretError {
    /// Errors the provider never answered; these abort the run instead of
    /// being reported as a result row.
    pub fn is_fatal(&self) -> bool {
        matches!(self, SecretError::Transport(_) | SecretError::AssumeRole { .. })
    }
}
