//! Storefront boot binary: loads configuration, opens the database, creates
//! the schema, seeds the catalog, and logs a store summary.

use celebumore::config::{self, Settings};
use celebumore::core::{report, seed};
use celebumore::errors::Result;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; non-fatal, env vars can be set externally
    dotenv().ok();

    // 3. Load settings and the catalog seed file
    let settings = Settings::from_env();
    let catalog = config::catalog::load_config(&settings.catalog_path)?;
    info!(
        database_url = %settings.database_url,
        catalog = %settings.catalog_path,
        "configuration loaded"
    );

    // 4. Initialize the database
    let db = config::database::create_connection(&settings.database_url).await?;
    config::database::create_tables(&db).await?;
    info!("database initialized");

    // 5. Seed catalog products and sample feedback (first run only)
    seed::seed_catalog(&db, &catalog).await?;

    // 6. Report store state
    let summary = report::store_summary(&db).await?;
    info!(
        orders = summary.orders,
        uploads = summary.uploads,
        feedback = summary.feedback_entries,
        revenue = summary.revenue,
        "storefront ready"
    );

    Ok(())
}
