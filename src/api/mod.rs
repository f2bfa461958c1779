//! HTTP API module for the Teaching-Salary Engine.
//!
//! A single JSON endpoint that turns a report request into a
//! [`SalaryReport`](crate::models::SalaryReport).

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ReportKind, ReportRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
