use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for registration
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterDto {
    pub nama: String,
    pub email: String,
    #[validate(length(min = 6, message = "Password minimal 6 karakter!"))]
    pub password: String,
}

/// Request DTO for login
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Response DTO for a successful login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub message: String,
    pub token: String,
    pub role: String,
    pub nama: String,
}
