//! HTTP API module for the Attendance Engine.
//!
//! This module provides the REST API endpoints used by the attendance
//! kiosks and the live dashboard.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AttendanceSubmission, EmployeeQuery, LoginRequest, OtherPersonRequest};
pub use response::{ApiError, LoginResponse, SaveAttendanceResponse};
pub use state::AppState;
