use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use ratings::{config::AppConfig, db, logging, Importer};

/// Load the MovieLens seed files into the ratings database.
#[derive(Parser, Debug)]
#[command(name = "seed")]
#[command(version)]
struct Args {
    /// Directory holding u.user, u.item and u.data
    #[arg(short, long, default_value = "seed_data", env = "SEED_DATA_DIR")]
    data_dir: PathBuf,

    /// Leave the user and movie id sequences as they are
    #[arg(long)]
    skip_resync: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    logging::init("ratings=info");

    let args = Args::parse();
    let config = AppConfig::from_env()?;
    let pool = db::connect(&config).await?;

    let importer = Importer::new(pool.clone(), &args.data_dir);
    let summary = importer
        .run(!args.skip_resync)
        .await
        .with_context(|| format!("import from {}", args.data_dir.display()))?;

    tracing::info!(?summary, "seed complete");
    pool.close().await;
    Ok(())
}
