//! HTTP adapter for check-in and progress report endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CheckinRecordedResponse, CheckinResponse, CreateCheckinRequest, ProgressMetricsResponse,
    ProgressReportResponse,
};
pub use handlers::CheckinHandlers;
pub use routes::{checkin_routes, progress_routes};
