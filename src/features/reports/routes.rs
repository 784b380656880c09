use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::features::reports::handlers::{self, ReportState};
use crate::features::reports::services::ReportService;
use crate::features::users::UserService;
use crate::modules::storage::Storage;
use crate::shared::constants::MAX_MULTIPART_BODY_SIZE;

/// Create routes for the reports feature
///
/// All routes here require the auth middleware to be applied by the
/// caller; `/api/stats` is registered separately as a public route.
pub fn routes(
    report_service: Arc<ReportService>,
    user_service: Arc<UserService>,
    storage: Arc<Storage>,
) -> Router {
    let state = ReportState {
        report_service,
        user_service,
        storage,
    };

    Router::new()
        .route(
            "/api/reports",
            post(handlers::create_report).get(handlers::list_reports),
        )
        .route("/api/reports/{id}/status", patch(handlers::update_status))
        .route("/api/reports/{id}", delete(handlers::delete_report))
        // Uploads may exceed axum's default 2 MB body cap
        .layer(DefaultBodyLimit::max(MAX_MULTIPART_BODY_SIZE))
        .with_state(state)
}

/// Public stats route (no token required)
pub fn public_routes(
    report_service: Arc<ReportService>,
    user_service: Arc<UserService>,
    storage: Arc<Storage>,
) -> Router {
    let state = ReportState {
        report_service,
        user_service,
        storage,
    };

    Router::new()
        .route("/api/stats", get(handlers::get_stats))
        .with_state(state)
}
