use chrono::Utc;
use sqlx::AnyPool;

use crate::core::error::{AppError, Result};
use crate::features::users::models::User;

/// Service for user rows. Users are created at registration (or by the
/// admin seeding binary) and never updated or deleted through the API.
pub struct UserService {
    pool: AnyPool,
}

impl UserService {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Insert a new user. A duplicate email trips the unique constraint
    /// and surfaces as a database error.
    pub async fn create(
        &self,
        nama: &str,
        email: &str,
        password_hash: &str,
        role: &str,
    ) -> Result<()> {
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO users (nama, email, password, role, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(nama)
        .bind(email)
        .bind(password_hash)
        .bind(role)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("User created: email={}, role={}", email, role);
        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, nama, email, password, role, created_at, updated_at
            FROM users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to find user by email: {:?}", e);
            AppError::Database(e)
        })
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count users: {:?}", e);
                AppError::Database(e)
            })
    }
}
