mod client;
mod errors;
mod query;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use tracing::{debug, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use crate::client::{TelemetryClient, TelemetryConfig, DEFAULT_TELEMETRY_ENDPOINT};
use crate::query::{Metric, MetricsQuery, QueryInterval};

#[derive(Debug, Parser)]
#[command(name = "ccloud-metrics")]
#[command(about = "Query the last hour of Confluent Cloud metrics for a Kafka cluster", long_about = None)]
#[command(
    after_help = "Create a Confluent Cloud API key with metrics access first.

Examples:
  ccloud-metrics --apikey KEY --apisecret SECRET --cluster-id lkc-w9ykm --verbose
  ccloud-metrics --apikey KEY --apisecret SECRET --cluster-id lkc-w9ykm --metric sent_bytes

Env:
  CCLOUD_TELEMETRY_ENDPOINT (default https://api.telemetry.confluent.cloud/v2/metrics/cloud/query)"
)]
struct Cli {
    #[arg(long, required = true, help = "Confluent Cloud API key")]
    apikey: String,

    #[arg(long, required = true, help = "Confluent Cloud API secret")]
    apisecret: String,

    #[arg(long, required = true, help = "Cluster ID to query, eg lkc-w9ykm")]
    cluster_id: String,

    #[arg(long, default_value_t = false, help = "Print debug info")]
    verbose: bool,

    #[arg(
        long = "metric",
        value_enum,
        default_values_t = [Metric::ReceivedBytes],
        help = "Metric to query (repeatable)"
    )]
    metrics: Vec<Metric>,

    #[arg(long, env = "CCLOUD_TELEMETRY_ENDPOINT", default_value = DEFAULT_TELEMETRY_ENDPOINT)]
    endpoint: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let span = info_span!("ccloud_metrics", cluster_id = %cli.cluster_id);
    run(cli).instrument(span).await
}

async fn run(cli: Cli) -> Result<()> {
    debug!(
        cluster_id = %cli.cluster_id,
        endpoint = %cli.endpoint,
        metrics = ?cli.metrics,
        "arguments"
    );

    let client = TelemetryClient::new(TelemetryConfig {
        endpoint: cli.endpoint,
        api_key: cli.apikey,
        api_secret: cli.apisecret,
    })?;

    let interval = QueryInterval::trailing_hour(Local::now());
    for metric in cli.metrics {
        debug!("getting metric: {}", metric);
        let query = MetricsQuery::new(metric, &cli.cluster_id, &interval);
        client.query(&query).await?;
    }

    Ok(())
}

#[cfg(test)]
mod query_test;
