use thiserror::Error;

pub type Result<T> = std::result::Result<T, LimitsError>;

#[derive(Debug, Error)]
pub enum LimitsError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("unable to decode the response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no such cluster: {0}")]
    NoSuchCluster(String),

    #[error("no cluster limits available for cluster type {0}")]
    NoTierLimits(String),

    #[error("limits for cluster type {0} are not an object")]
    MalformedTier(String),
}
