use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::reports::models::{Report, ReportWithReporter};

/// Minimal reporter profile embedded in each listed report.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PelaporDto {
    pub nama: String,
}

/// Response DTO for a report. Field names are camelCase to match what
/// the SPA renders.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponseDto {
    pub id: i64,
    pub user_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: String,
    pub latitude: f64,
    pub longitude: Option<f64>,
    pub damage_type: Option<String>,
    pub damage_severity: Option<String>,
    pub traffic_impact: Option<String>,
    pub impacted_vehicles: Option<Vec<String>>,
    pub status: String,
    pub priority: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pelapor: Option<PelaporDto>,
}

impl From<Report> for ReportResponseDto {
    fn from(r: Report) -> Self {
        // The stored JSON text becomes a native array again on the way out.
        let impacted_vehicles = r
            .impacted_vehicles
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Vec<String>>(raw).ok());

        Self {
            id: r.id,
            user_id: r.user_id,
            title: r.title,
            description: r.description,
            photo: r.photo,
            latitude: r.latitude,
            longitude: r.longitude,
            damage_type: r.damage_type,
            damage_severity: r.damage_severity,
            traffic_impact: r.traffic_impact,
            impacted_vehicles,
            status: r.status,
            priority: r.priority,
            created_at: r.created_at,
            updated_at: r.updated_at,
            pelapor: None,
        }
    }
}

impl From<ReportWithReporter> for ReportResponseDto {
    fn from(row: ReportWithReporter) -> Self {
        let mut dto: ReportResponseDto = row.report.into();
        dto.pelapor = row.pelapor_nama.map(|nama| PelaporDto { nama });
        dto
    }
}

/// Request DTO for the status-update endpoint. Both fields are optional;
/// values are validated against their enum sets by the service so the
/// wire error stays "Status tidak valid!" / "Prioritas tidak valid!".
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStatusDto {
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// Response DTO for the public stats endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponseDto {
    pub user_count: i64,
    pub resolved_reports_count: i64,
    pub region_count: i64,
}
