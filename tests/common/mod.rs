use std::path::PathBuf;
use std::sync::Arc;

use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::any::{install_default_drivers, AnyPoolOptions};
use sqlx::AnyPool;

use laporjalan::core::config::{
    AppConfig, AuthConfig, Config, DatabaseConfig, Environment, StorageConfig,
};
use laporjalan::core::database::{self, Dialect};
use laporjalan::modules::storage::Storage;

pub const TEST_SECRET: &str = "test-secret-key";

/// A fully wired application over an in-memory database and a
/// throwaway uploads directory.
pub struct TestApp {
    pub server: TestServer,
    pub pool: AnyPool,
    uploads_dir: PathBuf,
}

impl TestApp {
    pub async fn spawn() -> Self {
        install_default_drivers();

        // A single connection: every sqlite::memory: connection opens a
        // brand-new database, so the pool must never hand out a second one.
        let pool = AnyPoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("failed to open in-memory database");

        database::sync_schema(&pool, Dialect::Sqlite)
            .await
            .expect("failed to sync schema");

        let uploads_dir =
            std::env::temp_dir().join(format!("laporjalan-it-{}", uuid::Uuid::new_v4()));

        let config = Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                environment: Environment::Development,
                cors_allowed_origins: vec!["*".to_string()],
                frontend_dist: "client/dist".to_string(),
            },
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
                min_connections: 1,
                acquire_timeout_secs: 5,
            },
            auth: AuthConfig {
                secret: TEST_SECRET.to_string(),
            },
            storage: StorageConfig {
                s3_endpoint: None,
                s3_access_key: None,
                s3_secret_key: None,
                s3_bucket: "laporjalan".to_string(),
                s3_region: "us-east-1".to_string(),
                s3_folder: "lapor-jalan".to_string(),
                uploads_dir: uploads_dir.to_string_lossy().into_owned(),
            },
        };

        let storage = Arc::new(
            Storage::from_config(&config.storage)
                .await
                .expect("failed to initialize local storage"),
        );

        let app = laporjalan::build_app(&config, pool.clone(), Arc::clone(&storage));
        let server = TestServer::new(app).expect("failed to start test server");

        Self {
            server,
            pool,
            uploads_dir,
        }
    }

    pub async fn register(&self, nama: &str, email: &str, password: &str) -> axum_test::TestResponse {
        self.server
            .post("/api/auth/register")
            .json(&json!({ "nama": nama, "email": email, "password": password }))
            .await
    }

    pub async fn login(&self, email: &str, password: &str) -> axum_test::TestResponse {
        self.server
            .post("/api/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .await
    }

    /// Register + login, returning the bearer token.
    pub async fn login_token(&self, nama: &str, email: &str, password: &str) -> String {
        self.register(nama, email, password).await.assert_status_ok();

        let response = self.login(email, password).await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["token"]
            .as_str()
            .expect("login response carries no token")
            .to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.uploads_dir);
    }
}
