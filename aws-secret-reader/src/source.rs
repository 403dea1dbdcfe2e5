use std::fmt::Debug;

use async_trait::async_trait;
use aws_config::{meta::region::RegionProviderChain, BehaviorVersion};
use aws_sdk_secretsmanager::config::Credentials;
use aws_sdk_secretsmanager::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_secretsmanager::operation::get_secret_value::{GetSecretValueError, GetSecretValueOutput};
use aws_sdk_secretsmanager::Client;
use tracing::debug;

use crate::errors::{Result, SecretError};

const ROLE_SESSION_NAME: &str = "aws-secret-reader";

/// Anything that can hand back the raw string payload of a secret.
#[async_trait]
pub trait SecretSource: Send + Sync {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String>;
}

/// Build a Secrets Manager client, optionally acting as `assume_role_arn`.
pub async fn secrets_manager_client(assume_role_arn: Option<&str>) -> Result<Client> {
    let region_provider = RegionProviderChain::default_provider();
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    let Some(role_arn) = assume_role_arn else {
        return Ok(Client::new(&sdk_config));
    };

    debug!(%role_arn, "assuming role");
    let sts = aws_sdk_sts::Client::new(&sdk_config);
    let assumed = sts
        .assume_role()
        .role_arn(role_arn)
        .role_session_name(ROLE_SESSION_NAME)
        .send()
        .await
        .map_err(|e| SecretError::AssumeRole {
            role_arn: role_arn.to_string(),
            reason: aws_sdk_sts::error::DisplayErrorContext(&e).to_string(),
        })?;

    let creds = assumed.credentials().ok_or_else(|| SecretError::AssumeRole {
        role_arn: role_arn.to_string(),
        reason: "no credentials in response".to_string(),
    })?;

    let credentials = Credentials::new(
        creds.access_key_id(),
        creds.secret_access_key(),
        Some(creds.session_token().to_string()),
        None,
        "AssumeRole",
    );
    let config = aws_sdk_secretsmanager::config::Builder::from(&sdk_config)
        .credentials_provider(credentials)
        .build();
    Ok(Client::from_conf(config))
}

pub struct AwsSecretSource {
    client: Client,
}

impl AwsSecretSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SecretSource for AwsSecretSource {
    async fn get_secret_string(&self, secret_id: &str) -> Result<String> {
        let output = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(classify)?;

        secret_string(output)
    }
}

/// Only errors the service itself returned become result rows; dispatch,
/// timeout and request construction failures stay fatal.
pub(crate) fn classify<R: Debug>(err: SdkError<GetSecretValueError, R>) -> SecretError {
    let err = match err {
        SdkError::ServiceError(ctx) => ctx.into_err(),
        other => return SecretError::Transport(DisplayErrorContext(&other).to_string()),
    };

    if err.is_resource_not_found_exception() {
        return SecretError::NotFound;
    }
    match (err.code(), err.message()) {
        (Some(code), Some(message)) => SecretError::Client(format!(
            "An error occurred ({}) when calling the GetSecretValue operation: {}",
            code, message
        )),
        _ => SecretError::Client(DisplayErrorContext(&err).to_string()),
    }
}

pub(crate) fn secret_string(output: GetSecretValueOutput) -> Result<String> {
    output
        .secret_string()
        .map(str::to_string)
        .ok_or_else(|| SecretError::Client("secret has no string value".to_string()))
}
