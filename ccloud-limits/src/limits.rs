//! Cluster metadata and per-tier usage limits, as returned by Confluent Cloud.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::errors::{LimitsError, Result};

/// Unit reported for limits that have none.
pub const UNDEFINED_UNIT: &str = "UNDEFINED";

const NAME_WIDTH: usize = 40;

/// `GET /cmk/v2/clusters` response.
#[derive(Debug, Deserialize)]
pub struct ClusterList {
    pub data: Vec<ClusterRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterRecord {
    pub id: String,
    pub spec: ClusterSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterSpec {
    pub config: ClusterConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterConfig {
    pub kind: String,
}

impl ClusterRecord {
    /// Tier name as used to key the usage limits table, e.g. `BASIC`.
    pub fn tier(&self) -> String {
        self.spec.config.kind.to_uppercase()
    }
}

pub fn find_cluster<'a>(
    clusters: &'a [ClusterRecord],
    cluster_id: &str,
) -> Result<&'a ClusterRecord> {
    clusters
        .iter()
        .find(|c| c.id == cluster_id)
        .ok_or_else(|| LimitsError::NoSuchCluster(cluster_id.to_string()))
}

/// Platform-wide usage limits keyed by tier.
///
/// Tiers and limits keep the order the API returned them in.
#[derive(Debug, Deserialize)]
pub struct UsageLimits {
    pub tier_limits: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Limit {
    pub value: Value,
    pub unit: String,
}

impl UsageLimits {
    pub fn for_tier(&self, tier: &str) -> Result<Vec<(String, Limit)>> {
        let table = self
            .tier_limits
            .get(tier)
            .ok_or_else(|| LimitsError::NoTierLimits(tier.to_string()))?
            .as_object()
            .ok_or_else(|| LimitsError::MalformedTier(tier.to_string()))?;

        table
            .iter()
            .map(|(name, raw)| -> Result<(String, Limit)> {
                Ok((name.clone(), Limit::deserialize(raw)?))
            })
            .collect()
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::String(s) => f.write_str(s)?,
            other => write!(f, "{}", other)?,
        }
        if self.unit != UNDEFINED_UNIT {
            f.write_str(&self.unit)?;
        }
        Ok(())
    }
}

pub fn format_limit_line(name: &str, limit: &Limit) -> String {
    format!("{:<width$}{}", name, limit, width = NAME_WIDTH)
}
