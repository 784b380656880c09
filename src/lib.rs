pub mod core;
pub mod features;
pub mod modules;
pub mod shared;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use sqlx::AnyPool;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{Config, Environment};
use crate::core::error::{AppError, Result};
use crate::core::openapi::ApiDoc;
use crate::core::{database, middleware};
use crate::features::auth::routes as auth_routes;
use crate::features::auth::services::{AuthService, TokenService};
use crate::features::reports::routes as reports_routes;
use crate::features::reports::services::ReportService;
use crate::features::users::UserService;
use crate::modules::storage::Storage;

/// API root; doubles as the health check.
async fn api_root() -> Json<serde_json::Value> {
    Json(json!({ "message": "LaporJalan API", "status": "ok" }))
}

/// Database connectivity probe.
async fn db_check(
    axum::extract::State(pool): axum::extract::State<AnyPool>,
) -> Result<Json<serde_json::Value>> {
    database::ping(&pool)
        .await
        .map_err(|e| AppError::Internal(format!("Database unreachable: {}", e)))?;
    Ok(Json(json!({ "message": "Database terhubung!" })))
}

/// Assemble the full application router: swagger, public and protected
/// API routes, static uploads, and the ambient middleware stack.
pub fn build_app(config: &Config, pool: AnyPool, storage: Arc<Storage>) -> Router {
    let user_service = Arc::new(UserService::new(pool.clone()));
    let report_service = Arc::new(ReportService::new(pool.clone()));
    let token_service = Arc::new(TokenService::new(config.auth.clone()));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_service),
        Arc::clone(&token_service),
    ));

    let swagger =
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // Report CRUD requires a valid bearer token
    let protected_routes = reports_routes::routes(
        Arc::clone(&report_service),
        Arc::clone(&user_service),
        Arc::clone(&storage),
    )
    .route_layer(axum::middleware::from_fn_with_state(
        Arc::clone(&token_service),
        middleware::auth_middleware,
    ));

    let public_routes = Router::new()
        .merge(auth_routes::routes(auth_service))
        .merge(reports_routes::public_routes(
            report_service,
            user_service,
            Arc::clone(&storage),
        ))
        .route("/api", get(api_root))
        .route("/api/db-check", get(db_check).with_state(pool));

    let mut app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes);

    // Locally stored photos are served back under /uploads/*
    if let Some(dir) = storage.local_dir() {
        app = app.nest_service("/uploads", ServeDir::new(dir));
    }

    // Same-origin SPA bundle in production, when one is present
    if config.app.environment == Environment::Production {
        let dist = std::path::Path::new(&config.app.frontend_dist);
        if dist.is_dir() {
            let index = dist.join("index.html");
            app = app.fallback_service(ServeDir::new(dist).fallback(ServeFile::new(index)));
        }
    }

    app.layer(middleware::cors_layer(
        config.app.environment,
        config.app.cors_allowed_origins.clone(),
    ))
    .layer(PropagateRequestIdLayer::x_request_id())
    .layer(
        TraceLayer::new_for_http()
            .make_span_with(middleware::MakeSpanWithRequestId)
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    )
    .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
