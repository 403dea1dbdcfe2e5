//! Reading one secret into a tagged outcome, and rendering that outcome in
//! the `(error rows, payload-or-false)` report shape.

use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::errors::{Result, SecretError};
use crate::source::SecretSource;

#[derive(Debug)]
pub enum SecretOutcome {
    Found(Value),
    Failed {
        secret_id: String,
        error: SecretError,
    },
}

/// Read one secret. Answers from the provider are captured in the outcome;
/// failing to reach it at all is returned as an error.
pub async fn read_secret<S>(source: &S, secret_id: &str) -> Result<SecretOutcome>
where
    S: SecretSource + ?Sized,
{
    match fetch_json(source, secret_id).await {
        Ok(payload) => {
            debug!(%secret_id, "secret decoded");
            Ok(SecretOutcome::Found(payload))
        }
        Err(error) if error.is_fatal() => Err(error),
        Err(error) => {
            warn!(%secret_id, %error, "unable to read secret");
            Ok(SecretOutcome::Failed {
                secret_id: secret_id.to_string(),
                error,
            })
        }
    }
}

async fn fetch_json<S>(source: &S, secret_id: &str) -> Result<Value>
where
    S: SecretSource + ?Sized,
{
    let raw = source.get_secret_string(secret_id).await?;
    Ok(serde_json::from_str(&raw)?)
}

impl SecretOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SecretOutcome::Found(_))
    }

    /// Empty on success, a single `["ERROR", secret_id, cause]` row otherwise.
    pub fn rows(&self) -> Vec<[String; 3]> {
        match self {
            SecretOutcome::Found(_) => Vec::new(),
            SecretOutcome::Failed { secret_id, error } => vec![[
                "ERROR".to_string(),
                secret_id.clone(),
                error.to_string(),
            ]],
        }
    }

    pub fn payload(&self) -> Value {
        match self {
            SecretOutcome::Found(payload) => payload.clone(),
            SecretOutcome::Failed { .. } => Value::Bool(false),
        }
    }

    pub fn to_report(&self) -> Value {
        json!([self.rows(), self.payload()])
    }
}
