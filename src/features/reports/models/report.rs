use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Workflow state of a report. Only these three values are accepted by
/// the status-update endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReportStatus {
    #[default]
    Pending,
    Proses,
    Selesai,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "Pending",
            ReportStatus::Proses => "Proses",
            ReportStatus::Selesai => "Selesai",
        }
    }
}

impl FromStr for ReportStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(ReportStatus::Pending),
            "Proses" => Ok(ReportStatus::Proses),
            "Selesai" => Ok(ReportStatus::Selesai),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Urgency classification assigned by an administrator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReportPriority {
    Rendah,
    #[default]
    Sedang,
    Tinggi,
    Darurat,
}

impl ReportPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportPriority::Rendah => "Rendah",
            ReportPriority::Sedang => "Sedang",
            ReportPriority::Tinggi => "Tinggi",
            ReportPriority::Darurat => "Darurat",
        }
    }
}

impl FromStr for ReportPriority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Rendah" => Ok(ReportPriority::Rendah),
            "Sedang" => Ok(ReportPriority::Sedang),
            "Tinggi" => Ok(ReportPriority::Tinggi),
            "Darurat" => Ok(ReportPriority::Darurat),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ReportPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database row for a report.
///
/// `impacted_vehicles` holds a JSON-encoded array of vehicle tags (it is
/// normalized to a typed list at the API boundary). `photo` is either a
/// local filename or an absolute remote URL. Status and priority are
/// stored as their canonical strings; the enum types above define the
/// accepted sets.
#[derive(Debug, Clone, FromRow)]
pub struct Report {
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
    pub impacted_vehicles: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Report row joined with the minimal reporter profile (display name
/// only), as returned by the list endpoint.
#[derive(Debug, Clone, FromRow)]
pub struct ReportWithReporter {
    #[sqlx(flatten)]
    pub report: Report,
    pub pelapor_nama: Option<String>,
}

/// Fields accepted at report creation, already normalized by the
/// multipart handler.
#[derive(Debug, Clone)]
pub struct CreateReport {
    pub user_id: i64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub photo: String,
    pub latitude: f64,
    pub longitude: Option<f64>,
    pub damage_type: Option<String>,
    pub damage_severity: Option<String>,
    pub traffic_impact: Option<String>,
    pub impacted_vehicles: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("Pending".parse(), Ok(ReportStatus::Pending));
        assert_eq!("Proses".parse(), Ok(ReportStatus::Proses));
        assert_eq!("Selesai".parse(), Ok(ReportStatus::Selesai));
        assert_eq!("Done".parse::<ReportStatus>(), Err(()));
        assert_eq!("pending".parse::<ReportStatus>(), Err(()));
        assert_eq!("".parse::<ReportStatus>(), Err(()));
    }

    #[test]
    fn test_priority_from_str() {
        assert_eq!("Rendah".parse(), Ok(ReportPriority::Rendah));
        assert_eq!("Sedang".parse(), Ok(ReportPriority::Sedang));
        assert_eq!("Tinggi".parse(), Ok(ReportPriority::Tinggi));
        assert_eq!("Darurat".parse(), Ok(ReportPriority::Darurat));
        assert_eq!("Urgent".parse::<ReportPriority>(), Err(()));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ReportStatus::default().as_str(), "Pending");
        assert_eq!(ReportPriority::default().as_str(), "Sedang");
    }
}
