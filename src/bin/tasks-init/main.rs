mod cli;

use crate::cli::Cli;

use anyhow::Result;
use clap::Parser;
use personal_tasks::db::{self, DB_NAME, TASKS_COLLECTION};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    db::connect(&args.mongo_uri).await?;

    println!("✅ Validator ensured on '{}.{}'.", DB_NAME, TASKS_COLLECTION);
    Ok(())
}
