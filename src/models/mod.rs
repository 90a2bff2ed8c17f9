//! Core data models for the employee payroll service.
//!
//! This module contains the domain models shared by the store, the service,
//! the calculator and the HTTP layer.

mod calculation_result;
mod employee;

pub use calculation_result::{AuditStep, CalculationInput, SalaryBreakdown, SalaryResult};
pub use employee::{Employee, EmployeeDraft, EmployeeId, EmployeeType};
