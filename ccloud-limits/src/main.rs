mod client;
mod errors;
mod limits;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use crate::client::{ConfluentClient, ConfluentConfig, DEFAULT_API_URL, DEFAULT_USAGE_LIMITS_URL};
use crate::limits::{find_cluster, format_limit_line};

#[derive(Debug, Parser)]
#[command(name = "ccloud-limits")]
#[command(about = "Retrieve the Confluent Cloud cluster limits in effect", long_about = None)]
#[command(
    after_help = "Create a Confluent Cloud API key first.

Examples:
  ccloud-limits --apikey KEY --apisecret SECRET --environment-id env-12345 --cluster-id lkc-w9ykm

Env:
  CCLOUD_API_URL (default https://api.confluent.cloud)
  CCLOUD_USAGE_LIMITS_URL (default https://confluent.cloud/api/usage_limits)"
)]
struct Cli {
    #[arg(long, required = true, help = "Confluent Cloud API key")]
    apikey: String,

    #[arg(long, required = true, help = "Confluent Cloud API secret")]
    apisecret: String,

    #[arg(long, required = true, help = "Environment the cluster lives in, eg env-12345")]
    environment_id: String,

    #[arg(long, required = true, help = "Cluster ID to get limits for, eg lkc-w9ykm")]
    cluster_id: String,

    #[arg(long, default_value_t = false, help = "Print debug info")]
    verbose: bool,

    #[arg(long, env = "CCLOUD_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    #[arg(long, env = "CCLOUD_USAGE_LIMITS_URL", default_value = DEFAULT_USAGE_LIMITS_URL)]
    usage_limits_url: String,
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

    let span = info_span!(
        "ccloud_limits",
        environment_id = %cli.environment_id,
        cluster_id = %cli.cluster_id
    );
    run(cli).instrument(span).await
}

async fn run(cli: Cli) -> Result<()> {
    let client = ConfluentClient::new(ConfluentConfig {
        api_url: cli.api_url,
        usage_limits_url: cli.usage_limits_url,
        api_key: cli.apikey,
        api_secret: cli.apisecret,
    })?;

    let usage_limits = client.usage_limits().await?;
    let clusters = client.clusters(&cli.environment_id).await?;
    debug!("environment has {} cluster(s)", clusters.len());

    let cluster = find_cluster(&clusters, &cli.cluster_id)?;
    let tier = cluster.tier();
    debug!(%tier, "cluster type");

    for (name, limit) in usage_limits.for_tier(&tier)? {
        println!("{}", format_limit_line(&name, &limit));
    }

    Ok(())
}
