//! Salary dispatch by employee type.
//!
//! This module maps a stored employee type id onto the rule for that type.
//! Ids without a rule produce [`PayrollError::UnknownEmployeeType`] rather
//! than an amount.

use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, CalculationInput, EmployeeType, SalaryBreakdown};

use super::contractual::calculate_contractual_salary;
use super::regular::calculate_regular_salary;

/// The outcome of applying an employee type's salary rule.
#[derive(Debug, Clone)]
pub struct SalaryComputation {
    /// The rule that was applied.
    pub employee_type: EmployeeType,
    /// Amount components.
    pub breakdown: SalaryBreakdown,
    /// Rule applications, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the salary for an employee type id and period inputs.
///
/// Both day counts are checked before dispatch, so a negative value is
/// rejected even when the rule would ignore that field.
///
/// # Errors
///
/// - [`PayrollError::Validation`] for negative day counts, or absences
///   beyond the working days of a regular month
/// - [`PayrollError::UnknownEmployeeType`] when `employee_type_id` has no rule
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::calculate_salary;
/// use employee_payroll::config::PayrollConfig;
/// use employee_payroll::models::CalculationInput;
///
/// let input = CalculationInput { absent_days: 0, worked_days: 0 };
/// let result = calculate_salary(1, &input, &PayrollConfig::default()).unwrap();
/// assert_eq!(result.breakdown.net.to_string(), "17600.00");
/// ```
pub fn calculate_salary(
    employee_type_id: i32,
    input: &CalculationInput,
    config: &PayrollConfig,
) -> PayrollResult<SalaryComputation> {
    if input.absent_days < 0 {
        return Err(PayrollError::validation("absentDays", "must not be negative"));
    }
    if input.worked_days < 0 {
        return Err(PayrollError::validation("workedDays", "must not be negative"));
    }

    let employee_type = EmployeeType::from_id(employee_type_id).ok_or(
        PayrollError::UnknownEmployeeType {
            type_id: employee_type_id,
        },
    )?;

    match employee_type {
        EmployeeType::Regular => {
            let result = calculate_regular_salary(input.absent_days, &config.regular, 1)?;
            Ok(SalaryComputation {
                employee_type,
                breakdown: result.breakdown,
                audit_steps: result.audit_steps,
            })
        }
        EmployeeType::Contractual => {
            let result = calculate_contractual_salary(input.worked_days, &config.contractual, 1)?;
            Ok(SalaryComputation {
                employee_type,
                breakdown: result.breakdown,
                audit_steps: vec![result.audit_step],
            })
        }
    }
}
