//! Telemetry query document and the time interval it covers.

use std::fmt;

use chrono::{DateTime, FixedOffset, SecondsFormat, SubsecRound, TimeDelta, TimeZone};
use clap::ValueEnum;
use serde::Serialize;

use crate::errors::Result;

const METRIC_PREFIX: &str = "io.confluent.kafka.server";
const CLUSTER_FILTER_FIELD: &str = "resource.kafka.id";
const GRANULARITY: &str = "PT1M";

/// Kafka server metrics exposed by the telemetry API.
///
/// Names in the Confluent Cloud UI map onto them as:
/// Ingress = `received_bytes`, Egress = `sent_bytes`,
/// Total client connections = `active_connection_count`,
/// Requests = `request_count`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum Metric {
    ReceivedBytes,
    SentBytes,
    ActiveConnectionCount,
    RequestCount,
}

impl Metric {
    pub fn name(&self) -> &'static str {
        match self {
            Metric::ReceivedBytes => "received_bytes",
            Metric::SentBytes => "sent_bytes",
            Metric::ActiveConnectionCount => "active_connection_count",
            Metric::RequestCount => "request_count",
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}/{}", METRIC_PREFIX, self.name())
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ISO-8601 interval, rendered as `<start>/<end>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryInterval {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

impl QueryInterval {
    /// The hour ending at `now`, with both ends truncated to whole seconds.
    ///
    /// Each end carries the offset `now`'s zone has at that instant, so an
    /// hour spanning a DST change renders two different offsets.
    pub fn trailing_hour<Tz: TimeZone>(now: DateTime<Tz>) -> Self {
        let end = now.trunc_subsecs(0);
        let start = end.clone() - TimeDelta::hours(1);
        Self {
            start: start.fixed_offset(),
            end: end.fixed_offset(),
        }
    }
}

impl fmt::Display for QueryInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, false),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, false)
        )
    }
}

#[derive(Clone, Debug, Serialize)]
struct Aggregation {
    metric: String,
}

#[derive(Clone, Debug, Serialize)]
struct Filter {
    field: &'static str,
    op: &'static str,
    value: String,
}

/// Body of a `POST /v2/metrics/cloud/query` request.
///
/// Field order is the wire order.
#[derive(Clone, Debug, Serialize)]
pub struct MetricsQuery {
    aggregations: Vec<Aggregation>,
    filter: Filter,
    granularity: &'static str,
    intervals: Vec<String>,
    limit: u32,
}

impl MetricsQuery {
    pub fn new(metric: Metric, cluster_id: &str, interval: &QueryInterval) -> Self {
        Self {
            aggregations: vec![Aggregation {
                metric: metric.qualified_name(),
            }],
            filter: Filter {
                field: CLUSTER_FILTER_FIELD,
                op: "EQ",
                value: cluster_id.to_string(),
            },
            granularity: GRANULARITY,
            intervals: vec![interval.to_string()],
            limit: 1,
        }
    }

    pub fn to_payload(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
