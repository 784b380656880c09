pub mod report_handler;

pub use report_handler::{
    create_report, delete_report, get_stats, list_reports, update_status, ReportState,
};
