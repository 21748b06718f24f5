// Prints the ranking queries of a questions database as JSON

use anyhow::{anyhow, Context, Result};
use questions_db::{DatabaseConfig, Question, QuestionsDatabase, Tag};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_REPORT_LIMIT: u32 = 3;

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

fn report_limit() -> Result<u32> {
    match std::env::var("REPORT_LIMIT") {
        Ok(limit) => limit
            .parse()
            .with_context(|| format!("REPORT_LIMIT must be a number, got {limit:?}")),
        Err(_) => Ok(DEFAULT_REPORT_LIMIT),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let config = DatabaseConfig::from_env();
    let limit = report_limit()?;
    let db = QuestionsDatabase::open(&config).await?;
    db.migrate().await?;

    info!(limit, "building report");
    let report = serde_json::json!({
        "most_liked": Question::most_liked(db.pool(), limit).await?.unwrap_or_default(),
        "most_followed": Question::most_followed(db.pool(), limit).await?.unwrap_or_default(),
        "most_popular_tags": Tag::most_popular(db.pool()).await?,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    db.close().await;
    Ok(())
}
