//! HTTP API module for the employee payroll service.
//!
//! This module provides the REST endpoints for managing employees and
//! calculating their salaries.

mod auth;
mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculateSalaryRequest, CreateEmployeeRequest, EditEmployeeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
