//! Application state for the employee payroll API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::service::EmployeeService;

/// Shared application state.
///
/// Holds the employee service and, when authentication is enabled, the
/// bearer token every employee route must present.
#[derive(Clone)]
pub struct AppState {
    service: EmployeeService,
    api_token: Option<Arc<str>>,
}

impl AppState {
    /// Creates state with authentication disabled.
    pub fn new(service: EmployeeService) -> Self {
        Self {
            service,
            api_token: None,
        }
    }

    /// Requires `Authorization: Bearer <token>` on every employee route.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(Arc::from(token.into()));
        self
    }

    /// Returns the employee service.
    pub fn service(&self) -> &EmployeeService {
        &self.service
    }

    /// Returns the expected bearer token, if authentication is enabled.
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }
}
