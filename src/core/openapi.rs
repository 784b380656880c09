use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth::dtos as auth_dtos;
use crate::features::auth::handlers as auth_handlers;
use crate::features::reports::dtos as reports_dtos;
use crate::features::reports::handlers as reports_handlers;
use crate::features::reports::models as reports_models;
use crate::shared::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth_handlers::auth_handler::register,
        auth_handlers::auth_handler::login,
        // Reports
        reports_handlers::report_handler::create_report,
        reports_handlers::report_handler::list_reports,
        reports_handlers::report_handler::update_status,
        reports_handlers::report_handler::delete_report,
        reports_handlers::report_handler::get_stats,
    ),
    components(
        schemas(
            MessageResponse,
            // Auth
            auth_dtos::RegisterDto,
            auth_dtos::LoginDto,
            auth_dtos::LoginResponseDto,
            // Reports
            reports_models::ReportStatus,
            reports_models::ReportPriority,
            reports_dtos::PelaporDto,
            reports_dtos::ReportResponseDto,
            reports_dtos::UpdateStatusDto,
            reports_dtos::StatsResponseDto,
        )
    ),
    tags(
        (name = "auth", description = "Account registration and login"),
        (name = "reports", description = "Road-damage reports and public stats"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "LaporJalan API",
        version = "0.1.0",
        description = "Citizen road-damage reporting API",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
