//! Key Ages
//!
//! Prints one line per IAM user that has a dated access key:
//! `user<TAB>first group or none<TAB>key age in days`.
//!
//! Credentials come from the standard AWS chain. Logs go to stderr.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use ka_audit::Auditor;
use ka_iam::aws::AwsIamDirectory;

/// Access key age audit
#[derive(Parser, Debug)]
#[command(name = "ka-key-ages")]
#[command(about = "Report the age in days of every IAM user's first access key")]
struct Args {
    /// AWS region (defaults to the standard AWS configuration chain)
    #[arg(long, env = "KA_AWS_REGION")]
    region: Option<String>,

    /// Alternate IAM endpoint, e.g. http://localhost:4566 for LocalStack
    #[arg(long, env = "KA_AWS_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Users per ListUsers page (1-1000, service default if unset)
    #[arg(long, env = "KA_PAGE_SIZE")]
    page_size: Option<i32>,
}

#[tokio::main]
async fn main() -> Result<()> {
    ka_common::logging::init_logging("ka-key-ages");

    let args = Args::parse();
    info!(region = ?args.region, "Starting access key age audit");

    let mut directory = AwsIamDirectory::new(args.region, args.endpoint_url).await;
    if let Some(page_size) = args.page_size {
        directory = directory.with_page_size(page_size);
    }
    let auditor = Auditor::new(Arc::new(directory));

    let mut stdout = std::io::stdout().lock();
    auditor
        .write_report(&mut stdout)
        .await
        .context("Credential age audit failed")?;

    Ok(())
}
