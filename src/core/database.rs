use crate::core::config::DatabaseConfig;
use sqlx::any::AnyPoolOptions;
use sqlx::AnyPool;
use std::time::Duration;

/// SQL dialect behind the Any pool, derived from the connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MySql,
    Sqlite,
}

impl Dialect {
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("mysql:") {
            Dialect::MySql
        } else {
            Dialect::Sqlite
        }
    }
}

pub async fn create_pool(config: &DatabaseConfig) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    AnyPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await
}

/// Connectivity probe backing `GET /api/db-check`.
pub async fn ping(pool: &AnyPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Create the schema if it does not exist yet.
///
/// The dialect is only known at runtime, so this replaces file-based
/// migrations with per-dialect DDL. Timestamps are stored as RFC 3339
/// text, which both backends index and order correctly.
pub async fn sync_schema(pool: &AnyPool, dialect: Dialect) -> Result<(), sqlx::Error> {
    for statement in schema_statements(dialect) {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Database schema synchronized ({:?})", dialect);
    Ok(())
}

fn schema_statements(dialect: Dialect) -> &'static [&'static str] {
    match dialect {
        Dialect::Sqlite => &[
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nama TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL,
                role TEXT NOT NULL DEFAULT 'warga',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER REFERENCES users(id),
                title TEXT,
                description TEXT,
                photo TEXT NOT NULL,
                latitude DOUBLE NOT NULL,
                longitude DOUBLE,
                damage_type TEXT,
                damage_severity TEXT,
                traffic_impact TEXT,
                impacted_vehicles TEXT,
                status TEXT NOT NULL DEFAULT 'Pending',
                priority TEXT NOT NULL DEFAULT 'Sedang',
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        ],
        Dialect::MySql => &[
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                nama VARCHAR(255) NOT NULL,
                email VARCHAR(255) NOT NULL UNIQUE,
                password VARCHAR(255) NOT NULL,
                role VARCHAR(16) NOT NULL DEFAULT 'warga',
                created_at VARCHAR(64) NOT NULL,
                updated_at VARCHAR(64) NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS reports (
                id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
                user_id BIGINT,
                title VARCHAR(255),
                description TEXT,
                photo VARCHAR(512) NOT NULL,
                latitude DOUBLE NOT NULL,
                longitude DOUBLE,
                damage_type VARCHAR(255),
                damage_severity VARCHAR(255),
                traffic_impact VARCHAR(255),
                impacted_vehicles TEXT,
                status VARCHAR(16) NOT NULL DEFAULT 'Pending',
                priority VARCHAR(16) NOT NULL DEFAULT 'Sedang',
                created_at VARCHAR(64) NOT NULL,
                updated_at VARCHAR(64) NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id)
            )
            "#,
        ],
    }
}
