//! One-shot admin seeder.
//!
//! Creates the default admin account if it does not exist yet; safe to
//! run repeatedly. Run with `cargo run --bin create_admin`.

use laporjalan::core::config::Config;
use laporjalan::core::database::{self, Dialect};
use laporjalan::features::auth::services::hash_password;
use laporjalan::features::users::UserService;
use laporjalan::shared::constants::ROLE_ADMIN;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const ADMIN_NAMA: &str = "Administrator Utama";
const ADMIN_EMAIL: &str = "admin@laporjalan.com";
const ADMIN_PASSWORD: &str = "admin123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let dialect = Dialect::from_url(&config.database.url);
    let pool = database::create_pool(&config.database).await?;
    database::sync_schema(&pool, dialect)
        .await
        .map_err(|e| anyhow::anyhow!("Schema sync failed: {}", e))?;

    let users = UserService::new(pool);

    if users
        .find_by_email(ADMIN_EMAIL)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up admin account: {}", e))?
        .is_some()
    {
        tracing::info!("Admin account already exists: {}", ADMIN_EMAIL);
        return Ok(());
    }

    let hash = hash_password(ADMIN_PASSWORD.to_string())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to hash admin password: {}", e))?;

    users
        .create(ADMIN_NAMA, ADMIN_EMAIL, &hash, ROLE_ADMIN)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create admin account: {}", e))?;

    tracing::info!("Admin account created: {}", ADMIN_EMAIL);
    Ok(())
}
