use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub cors_allowed_origins: Vec<String>,
    /// Directory holding the SPA production bundle; served same-origin
    /// in production when it exists.
    pub frontend_dist: String,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    /// HS256 signing secret for issued bearer tokens.
    pub secret: String,
}

/// Photo storage configuration. The S3 strategy is active only when all
/// three credential variables are present; otherwise uploads fall back
/// to local disk under `uploads_dir`.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub s3_endpoint: Option<String>,
    pub s3_access_key: Option<String>,
    pub s3_secret_key: Option<String>,
    pub s3_bucket: String,
    pub s3_region: String,
    /// Key prefix for uploaded photos on the remote store.
    pub s3_folder: String,
    pub uploads_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            database: DatabaseConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            storage: StorageConfig::from_env()?,
        })
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        let environment = match env::var("NODE_ENV")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string())
            .as_str()
        {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let frontend_dist =
            env::var("FRONTEND_DIST").unwrap_or_else(|_| "client/dist".to_string());

        Ok(Self {
            host,
            port,
            environment,
            cors_allowed_origins,
            frontend_dist,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

    /// Fallback file-backed database used when no DATABASE_URL is set.
    const DEFAULT_SQLITE_URL: &'static str = "sqlite://laporjalan.sqlite?mode=rwc";

    pub fn from_env() -> Result<Self, String> {
        // DATABASE_URL selects a MySQL-compatible server; absence falls
        // back to a local SQLite file, mirroring the original deployment.
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| Self::DEFAULT_SQLITE_URL.to_string());

        let max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MAX_CONNECTIONS must be a valid number".to_string())?;

        let min_connections = env::var("DB_MIN_CONNECTIONS")
            .unwrap_or_else(|_| Self::DEFAULT_MIN_CONNECTIONS.to_string())
            .parse::<u32>()
            .map_err(|_| "DB_MIN_CONNECTIONS must be a valid number".to_string())?;

        let acquire_timeout_secs = env::var("DB_ACQUIRE_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_ACQUIRE_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "DB_ACQUIRE_TIMEOUT_SECS must be a valid number".to_string())?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
        })
    }
}

impl AuthConfig {
    pub fn from_env() -> Result<Self, String> {
        let secret = env::var("SECRET_KEY")
            .map_err(|_| "SECRET_KEY environment variable is required".to_string())?;

        Ok(Self { secret })
    }
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, String> {
        let s3_endpoint = env::var("S3_ENDPOINT").ok().filter(|s| !s.is_empty());
        let s3_access_key = env::var("S3_ACCESS_KEY").ok().filter(|s| !s.is_empty());
        let s3_secret_key = env::var("S3_SECRET_KEY").ok().filter(|s| !s.is_empty());

        let s3_bucket = env::var("S3_BUCKET").unwrap_or_else(|_| "laporjalan".to_string());
        let s3_region = env::var("S3_REGION").unwrap_or_else(|_| "us-east-1".to_string());
        let s3_folder = env::var("S3_FOLDER").unwrap_or_else(|_| "lapor-jalan".to_string());

        let uploads_dir = env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());

        Ok(Self {
            s3_endpoint,
            s3_access_key,
            s3_secret_key,
            s3_bucket,
            s3_region,
            s3_folder,
            uploads_dir,
        })
    }

    /// Remote storage is used only when the full credential triple is set.
    pub fn remote_credentials(&self) -> Option<(&str, &str, &str)> {
        match (&self.s3_endpoint, &self.s3_access_key, &self.s3_secret_key) {
            (Some(endpoint), Some(access), Some(secret)) => {
                Some((endpoint.as_str(), access.as_str(), secret.as_str()))
            }
            _ => None,
        }
    }
}
