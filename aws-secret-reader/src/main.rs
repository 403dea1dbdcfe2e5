mod errors;
mod secret;
mod source;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info_span, Instrument};
use tracing_subscriber::EnvFilter;

use crate::secret::read_secret;
use crate::source::{secrets_manager_client, AwsSecretSource};

#[derive(Debug, Parser)]
#[command(name = "aws-secret-reader")]
#[command(about = "Check that an AWS Secrets Manager secret can be read and holds valid JSON", long_about = None)]
#[command(
    after_help = "Prints [rows, payload] as JSON: [[], {...}] on success,
[[\"ERROR\", <secret>, <cause>]], false] on failure.

Examples:
  aws-secret-reader arn:aws:secretsmanager:us-east-1:123456789012:secret:kafka-creds
  aws-secret-reader kafka-creds --assume-role-arn arn:aws:iam::123456789012:role/reader"
)]
struct Cli {
    #[arg(help = "Secret name or ARN")]
    secret_id: String,

    #[arg(long, help = "IAM role to assume before reading the secret")]
    assume_role_arn: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let span = info_span!("aws_secret_reader", secret_id = %cli.secret_id);
    run(cli).instrument(span).await
}

async fn run(cli: Cli) -> Result<()> {
    let client = secrets_manager_client(cli.assume_role_arn.as_deref()).await?;
    let source = AwsSecretSource::new(client);

    let outcome = read_secret(&source, &cli.secret_id).await?;
    debug!(found = outcome.is_found(), "secret read finished");

    println!("{}", outcome.to_report());
    Ok(())
}
