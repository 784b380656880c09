use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginDto, LoginResponseDto, RegisterDto};
use crate::features::auth::services::AuthService;
use crate::shared::types::MessageResponse;

/// Register a new citizen account
#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterDto,
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 400, description = "Password too short"),
        (status = 500, description = "Registration failed (including duplicate email)")
    ),
    tag = "auth"
)]
pub async fn register(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<RegisterDto>,
) -> Result<Json<MessageResponse>> {
    service.register(dto).await?;
    Ok(Json(MessageResponse::new("Registrasi berhasil!")))
}

/// Authenticate and receive a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginDto,
    responses(
        (status = 200, description = "Login successful", body = LoginResponseDto),
        (status = 400, description = "Wrong password"),
        (status = 404, description = "No user with that email")
    ),
    tag = "auth"
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginDto>,
) -> Result<Json<LoginResponseDto>> {
    let response = service.login(dto).await?;
    Ok(Json(response))
}
