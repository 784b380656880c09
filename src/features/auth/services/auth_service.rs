use std::sync::Arc;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::{LoginDto, LoginResponseDto, RegisterDto};
use crate::features::auth::services::TokenService;
use crate::features::users::UserService;
use crate::shared::constants::ROLE_WARGA;
use crate::shared::validation::first_validation_message;

/// bcrypt cost factor used for password hashing.
const BCRYPT_COST: u32 = 10;

/// Service for registration and credential authentication.
pub struct AuthService {
    users: Arc<UserService>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(users: Arc<UserService>, tokens: Arc<TokenService>) -> Self {
        Self { users, tokens }
    }

    /// Register a new citizen account.
    ///
    /// Rejects passwords shorter than 6 characters. A duplicate email
    /// trips the unique constraint and propagates as a database error.
    pub async fn register(&self, dto: RegisterDto) -> Result<()> {
        dto.validate()
            .map_err(|e| AppError::Validation(first_validation_message(&e)))?;

        let hash = hash_password(dto.password).await?;

        self.users
            .create(&dto.nama, &dto.email, &hash, ROLE_WARGA)
            .await?;

        Ok(())
    }

    /// Authenticate credentials and issue a bearer token carrying the
    /// user id and role.
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponseDto> {
        let user = self
            .users
            .find_by_email(&dto.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User tidak ditemukan".to_string()))?;

        let valid = verify_password(dto.password, user.password.clone()).await?;
        if !valid {
            return Err(AppError::Auth("Password salah".to_string()));
        }

        let token = self.tokens.sign(user.id, &user.role)?;

        tracing::info!("Login successful: user_id={}, role={}", user.id, user.role);

        Ok(LoginResponseDto {
            message: "Login sukses".to_string(),
            token,
            role: user.role,
            nama: user.nama,
        })
    }
}

/// Hash a password on a blocking thread; bcrypt at cost 10 is too slow
/// for the async executor.
pub async fn hash_password(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

async fn verify_password(password: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}
