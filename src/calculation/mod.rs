//! Salary calculation logic for the employee payroll service.
//!
//! This module contains the per-type salary rules (regular and
//! contractual), the dispatcher that selects a rule from an employee's type
//! id, and the money rounding and formatting helpers. Every function here is
//! pure: rates come in as arguments and nothing is stored.

mod contractual;
mod regular;
mod rounding;
mod salary;

pub use contractual::{ContractualSalaryResult, calculate_contractual_salary};
pub use regular::{RegularSalaryResult, calculate_regular_salary};
pub use rounding::{format_amount, round_money};
pub use salary::{SalaryComputation, calculate_salary};
