//! Salary calculation models.
//!
//! This module contains the [`CalculationInput`] consumed by the salary
//! calculator and the [`SalaryResult`] it produces, including the amount
//! breakdown and an audit trace of the rules that were applied.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EmployeeId, EmployeeType};

/// Period inputs for a salary calculation.
///
/// Only the field relevant to the employee's type is used: `absent_days`
/// for regular employees and `worked_days` for contractual ones. Both must
/// be non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInput {
    /// Days absent in the period.
    #[serde(default)]
    pub absent_days: i32,
    /// Days worked in the period.
    #[serde(default)]
    pub worked_days: i32,
}

/// The components of a computed salary.
///
/// `net` is the payable amount, rounded half-up to two decimal places;
/// the other components are kept at full precision.
///
/// # Example
///
/// ```
/// use employee_payroll::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let breakdown = SalaryBreakdown {
///     gross: Decimal::from_str("20000.00").unwrap(),
///     deduction: Decimal::ZERO,
///     tax: Decimal::from_str("2400.00").unwrap(),
///     net: Decimal::from_str("17600.00").unwrap(),
/// };
/// assert_eq!(breakdown.gross - breakdown.deduction - breakdown.tax, breakdown.net);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Pay before deductions and tax.
    pub gross: Decimal,
    /// Absence deduction.
    pub deduction: Decimal,
    /// Tax withheld.
    pub tax: Decimal,
    /// Payable amount.
    pub net: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete result of a salary calculation for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The employee the calculation is for.
    pub employee_id: EmployeeId,
    /// The rule that was applied.
    pub employee_type: EmployeeType,
    /// The payable amount with exactly two decimal places.
    pub amount: Decimal,
    /// The payable amount formatted as `#,##0.00`.
    pub formatted_amount: String,
    /// Amount components.
    pub breakdown: SalaryBreakdown,
    /// Rule applications, in order.
    pub audit_steps: Vec<AuditStep>,
}
