use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::{LimitsError, Result};
use crate::limits::{ClusterList, ClusterRecord, UsageLimits};

pub const DEFAULT_API_URL: &str = "https://api.confluent.cloud";
pub const DEFAULT_USAGE_LIMITS_URL: &str = "https://confluent.cloud/api/usage_limits";

#[derive(Clone, Debug)]
pub struct ConfluentConfig {
    pub api_url: String,
    pub usage_limits_url: String,
    pub api_key: String,
    pub api_secret: String,
}

#[derive(Clone)]
pub struct ConfluentClient {
    cfg: ConfluentConfig,
    http: reqwest::Client,
}

impl ConfluentClient {
    pub fn new(cfg: ConfluentConfig) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self { cfg, http })
    }

    pub async fn usage_limits(&self) -> Result<UsageLimits> {
        self.get_json(&self.cfg.usage_limits_url, &[]).await
    }

    pub async fn clusters(&self, environment_id: &str) -> Result<Vec<ClusterRecord>> {
        let url = format!("{}/cmk/v2/clusters", self.cfg.api_url.trim_end_matches('/'));
        let list: ClusterList = self
            .get_json(&url, &[("environment", environment_id)])
            .await?;
        Ok(list.data)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let resp = self
            .http
            .get(url)
            .query(query)
            .basic_auth(&self.cfg.api_key, Some(&self.cfg.api_secret))
            .send()
            .await?;

        let status = resp.status();
        debug!(%status, url = %resp.url(), "response");
        let body = resp.text().await?;
        if !status.is_success() {
            return Err(LimitsError::Status {
                url: url.to_string(),
                status,
                body,
            });
        }

        debug!("{}", body);
        Ok(serde_json::from_str(&body)?)
    }
}
