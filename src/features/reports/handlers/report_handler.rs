use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, warn};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::reports::dtos::{ReportResponseDto, StatsResponseDto, UpdateStatusDto};
use crate::features::reports::models::CreateReport;
use crate::features::reports::services::ReportService;
use crate::features::users::UserService;
use crate::modules::storage::Storage;
use crate::shared::constants::MAX_UPLOAD_SIZE;
use crate::shared::types::{DataResponse, MessageResponse, UpdatedResponse};

/// State for report handlers
#[derive(Clone)]
pub struct ReportState {
    pub report_service: Arc<ReportService>,
    pub user_service: Arc<UserService>,
    pub storage: Arc<Storage>,
}

/// Raw photo part lifted out of the multipart body.
struct PhotoUpload {
    file_name: String,
    content_type: String,
    data: Vec<u8>,
}

/// Submit a new road-damage report
///
/// Accepts multipart/form-data with a `photo` file plus the text fields
/// title/description/latitude/longitude/damageType/damageSeverity/
/// trafficImpact/impactedVehicles.
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = "reports",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Report submitted", body = MessageResponse),
        (status = 400, description = "Missing photo or location"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_report(
    user: AuthenticatedUser,
    State(state): State<ReportState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let mut photo: Option<PhotoUpload> = None;
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut latitude: Option<f64> = None;
    let mut longitude: Option<f64> = None;
    let mut damage_type: Option<String> = None;
    let mut damage_severity: Option<String> = None;
    let mut traffic_impact: Option<String> = None;
    let mut impacted_vehicles: Option<Vec<String>> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "photo" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());
                let file_name = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "photo".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read photo bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read photo data: {}", e))
                })?;

                photo = Some(PhotoUpload {
                    file_name,
                    content_type,
                    data: data.to_vec(),
                });
            }
            "title" => title = read_text(field).await?,
            "description" => description = read_text(field).await?,
            "latitude" => {
                latitude = read_text(field).await?.and_then(|s| s.parse().ok());
            }
            "longitude" => {
                longitude = read_text(field).await?.and_then(|s| s.parse().ok());
            }
            "damageType" => damage_type = read_text(field).await?,
            "damageSeverity" => damage_severity = read_text(field).await?,
            "trafficImpact" => traffic_impact = read_text(field).await?,
            "impactedVehicles" => {
                impacted_vehicles = read_text(field).await?.map(parse_impacted_vehicles);
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // Photo and latitude are the only required fields.
    let (photo, latitude) = match (photo, latitude) {
        (Some(photo), Some(latitude)) => (photo, latitude),
        _ => {
            return Err(AppError::Validation("Foto dan Lokasi wajib ada!".to_string()));
        }
    };

    if photo.data.len() > MAX_UPLOAD_SIZE {
        return Err(AppError::Validation(
            "Ukuran foto maksimal 5 MB!".to_string(),
        ));
    }

    // Store the photo first; the resulting reference (URL or filename)
    // is what gets persisted. A failed insert after this point orphans
    // the stored file.
    let photo_ref = state
        .storage
        .store_photo(user.id, &photo.file_name, &photo.content_type, photo.data)
        .await?;

    state
        .report_service
        .create(&CreateReport {
            user_id: user.id,
            title,
            description,
            photo: photo_ref,
            latitude,
            longitude,
            damage_type,
            damage_severity,
            traffic_impact,
            impacted_vehicles,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Laporan berhasil dikirim!")),
    ))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<Option<String>> {
    let text = field
        .text()
        .await
        .map_err(|e| AppError::BadRequest(format!("Failed to read form field: {}", e)))?;

    if text.is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Normalize the impacted-vehicles form field into a typed list.
///
/// The SPA serializes the selection as a JSON array, but multipart text
/// fields arrive as plain strings. A value that fails to parse is kept
/// as a single-element list rather than aborting the request.
fn parse_impacted_vehicles(raw: String) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(vehicles) => vehicles,
        Err(e) => {
            warn!("Failed to parse impactedVehicles {:?}: {}", raw, e);
            vec![raw]
        }
    }
}

/// List all reports, newest first
#[utoipa::path(
    get,
    path = "/api/reports",
    tag = "reports",
    responses(
        (status = 200, description = "Every report with its reporter name", body = DataResponse<Vec<ReportResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_reports(
    _user: AuthenticatedUser,
    State(state): State<ReportState>,
) -> Result<Json<DataResponse<Vec<ReportResponseDto>>>> {
    let reports = state.report_service.list_all().await?;
    let data: Vec<ReportResponseDto> = reports.into_iter().map(|r| r.into()).collect();
    Ok(Json(DataResponse { data }))
}

/// Update a report's status and/or priority
#[utoipa::path(
    patch,
    path = "/api/reports/{id}/status",
    tag = "reports",
    params(("id" = i64, Path, description = "Report ID")),
    request_body = UpdateStatusDto,
    responses(
        (status = 200, description = "Report updated", body = UpdatedResponse<ReportResponseDto>),
        (status = 400, description = "Invalid status or priority value"),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_status(
    _user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateStatusDto>,
) -> Result<Json<UpdatedResponse<ReportResponseDto>>> {
    // Role is not re-verified here; any valid token passes.
    let report = state.report_service.update_status(id, &dto).await?;

    Ok(Json(UpdatedResponse {
        message: "Data berhasil diperbarui!".to_string(),
        data: report.into(),
    }))
}

/// Delete a report
#[utoipa::path(
    delete,
    path = "/api/reports/{id}",
    tag = "reports",
    params(("id" = i64, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report deleted", body = MessageResponse),
        (status = 404, description = "Report not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_report(
    _user: AuthenticatedUser,
    State(state): State<ReportState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    state.report_service.delete(id).await?;
    Ok(Json(MessageResponse::new("Laporan berhasil dihapus!")))
}

/// Public landing-page statistics
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = "reports",
    responses(
        (status = 200, description = "Aggregate counts", body = StatsResponseDto)
    )
)]
pub async fn get_stats(State(state): State<ReportState>) -> Result<Json<StatsResponseDto>> {
    let user_count = state.user_service.count().await?;
    let resolved_reports_count = state.report_service.count_resolved().await?;

    Ok(Json(StatsResponseDto {
        user_count,
        resolved_reports_count,
        // Single-region deployment
        region_count: 1,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impacted_vehicles_json_array() {
        assert_eq!(
            parse_impacted_vehicles(r#"["Motor","Mobil"]"#.to_string()),
            vec!["Motor".to_string(), "Mobil".to_string()]
        );
    }

    #[test]
    fn test_impacted_vehicles_plain_string_kept_whole() {
        // A value that is not a JSON array survives as a single element.
        assert_eq!(
            parse_impacted_vehicles("Motor, Mobil".to_string()),
            vec!["Motor, Mobil".to_string()]
        );
    }

    #[test]
    fn test_impacted_vehicles_empty_array() {
        assert_eq!(
            parse_impacted_vehicles("[]".to_string()),
            Vec::<String>::new()
        );
    }
}
