use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;

use crate::errors::{MetricsError, Result};
use crate::query::MetricsQuery;

pub const DEFAULT_TELEMETRY_ENDPOINT: &str =
    "https://api.telemetry.confluent.cloud/v2/metrics/cloud/query";

#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    pub endpoint: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Clone)]
pub struct TelemetryClient {
    cfg: TelemetryConfig,
    http: reqwest::Client,
}

impl TelemetryClient {
    pub fn new(cfg: TelemetryConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { cfg, http })
    }

    /// POST one query and hand back the decoded response body.
    pub async fn query(&self, query: &MetricsQuery) -> Result<Value> {
        let payload = query.to_payload()?;
        debug!("{}", payload);

        let resp = self
            .http
            .post(&self.cfg.endpoint)
            .basic_auth(&self.cfg.api_key, Some(&self.cfg.api_secret))
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        let status = resp.status();
        debug!(%status, url = %resp.url(), "telemetry response");
        if !status.is_success() {
            let body = resp.text().await?;
            return Err(MetricsError::Status { status, body });
        }

        let body: Value = resp.json().await?;
        debug!("{}", body);
        Ok(body)
    }
}
