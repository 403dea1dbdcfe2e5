use thiserror::Error;

pub type Result<T> = std::result::Result<T, MetricsError>;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unable to encode the metrics query: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("telemetry endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
