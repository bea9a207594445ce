//! Check-in command and query handlers.

mod create_checkin;
mod get_progress_report;

pub use create_checkin::{CreateCheckinCommand, CreateCheckinHandler};
pub use get_progress_report::{
    GetProgressReportHandler, GetProgressReportQuery, ProgressMetrics, ProgressReport,
};
