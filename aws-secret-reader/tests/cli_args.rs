use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

fn cli() -> Command {
    Command::cargo_bin("aws-secret-reader").expect("binary exists")
}

#[test]
fn secret_id_is_required() {
    cli()
        .assert()
        .failure()
        .code(2)
        .stderr(contains("<SECRET_ID>"));
}

#[test]
fn help_describes_report_shape() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--assume-role-arn"))
        .stdout(contains("[[], {...}]"));
}

#[test]
fn unreachable_endpoint_exits_non_zero() {
    cli()
        .arg("kafka-creds")
        .env("AWS_ENDPOINT_URL", "http://127.0.0.1:1")
        .env("AWS_REGION", "us-east-1")
        .env("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE")
        .env("AWS_SECRET_ACCESS_KEY", "secret")
        .env("AWS_MAX_ATTEMPTS", "1")
        .env("AWS_EC2_METADATA_DISABLED", "true")
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::is_empty())
        .stderr(contains("unable to reach Secrets Manager"));
}
