use chrono::Utc;
use sqlx::AnyPool;

use crate::core::error::{AppError, Result};
use crate::features::reports::dtos::UpdateStatusDto;
use crate::features::reports::models::{
    CreateReport, Report, ReportPriority, ReportStatus, ReportWithReporter,
};

const REPORT_COLUMNS: &str = "id, user_id, title, description, photo, latitude, longitude, \
     damage_type, damage_severity, traffic_impact, impacted_vehicles, \
     status, priority, created_at, updated_at";

/// Service for report operations
pub struct ReportService {
    pool: AnyPool,
}

impl ReportService {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Insert a new report with default status/priority. The photo
    /// reference has already been produced by the storage strategy.
    pub async fn create(&self, data: &CreateReport) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let impacted_vehicles = match &data.impacted_vehicles {
            Some(vehicles) => Some(serde_json::to_string(vehicles).map_err(|e| {
                AppError::Internal(format!("Failed to encode impacted vehicles: {}", e))
            })?),
            None => None,
        };

        sqlx::query(
            r#"
            INSERT INTO reports (
                user_id, title, description, photo, latitude, longitude,
                damage_type, damage_severity, traffic_impact, impacted_vehicles,
                status, priority, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(data.user_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.photo)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(&data.damage_type)
        .bind(&data.damage_severity)
        .bind(&data.traffic_impact)
        .bind(impacted_vehicles)
        .bind(ReportStatus::default().as_str())
        .bind(ReportPriority::default().as_str())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create report: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!("Report created for user {}", data.user_id);
        Ok(())
    }

    /// All reports, newest first, each joined with the reporter's
    /// display name. Filtering and pagination happen client-side.
    pub async fn list_all(&self) -> Result<Vec<ReportWithReporter>> {
        let sql = r#"
            SELECT r.id, r.user_id, r.title, r.description, r.photo,
                   r.latitude, r.longitude,
                   r.damage_type, r.damage_severity, r.traffic_impact,
                   r.impacted_vehicles, r.status, r.priority,
                   r.created_at, r.updated_at,
                   u.nama AS pelapor_nama
            FROM reports r
            LEFT JOIN users u ON u.id = r.user_id
            ORDER BY r.created_at DESC, r.id DESC
            "#;

        sqlx::query_as::<_, ReportWithReporter>(sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to list reports: {:?}", e);
                AppError::Database(e)
            })
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Report>> {
        let sql = format!("SELECT {} FROM reports WHERE id = ?", REPORT_COLUMNS);

        sqlx::query_as::<_, Report>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to find report: {:?}", e);
                AppError::Database(e)
            })
    }

    /// Update status and/or priority of an existing report. Each value,
    /// when supplied, must be in its enum set; fields not supplied keep
    /// their stored value.
    pub async fn update_status(&self, id: i64, dto: &UpdateStatusDto) -> Result<Report> {
        let mut report = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Laporan tidak ditemukan!".to_string()))?;

        if let Some(status) = &dto.status {
            let status: ReportStatus = status
                .parse()
                .map_err(|_| AppError::Validation("Status tidak valid!".to_string()))?;
            report.status = status.as_str().to_string();
        }

        if let Some(priority) = &dto.priority {
            let priority: ReportPriority = priority
                .parse()
                .map_err(|_| AppError::Validation("Prioritas tidak valid!".to_string()))?;
            report.priority = priority.as_str().to_string();
        }

        report.updated_at = Utc::now().to_rfc3339();

        sqlx::query("UPDATE reports SET status = ?, priority = ?, updated_at = ? WHERE id = ?")
            .bind(&report.status)
            .bind(&report.priority)
            .bind(&report.updated_at)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update report status: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!(
            "Report {} updated: status={}, priority={}",
            id,
            report.status,
            report.priority
        );

        Ok(report)
    }

    /// Hard delete. No soft-delete or audit trail.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Laporan tidak ditemukan!".to_string()))?;

        sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete report: {:?}", e);
                AppError::Database(e)
            })?;

        tracing::info!("Report {} deleted", id);
        Ok(())
    }

    /// Count of reports whose status is Selesai, for the public stats.
    pub async fn count_resolved(&self) -> Result<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports WHERE status = ?")
            .bind(ReportStatus::Selesai.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count resolved reports: {:?}", e);
                AppError::Database(e)
            })
    }
}
