//! Regular employee salary calculation.
//!
//! Regular employees earn a fixed monthly base salary. Each day of absence
//! deducts one working day's share of the base, and a flat tax on the base
//! is withheld.

use rust_decimal::Decimal;

use crate::config::RegularRates;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, SalaryBreakdown};

use super::rounding::round_money;

/// The result of a regular salary calculation, including audit steps.
#[derive(Debug, Clone)]
pub struct RegularSalaryResult {
    /// Amount components; `net` is rounded to two decimals.
    pub breakdown: SalaryBreakdown,
    /// One step each for the deduction, the tax and the net amount.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the monthly salary of a regular employee.
///
/// - deduction = (base / working days) * absent days, or zero with no absences
/// - tax = base * tax rate
/// - net = base - deduction - tax, rounded half-up to two decimals
///
/// # Errors
///
/// Returns [`PayrollError::Validation`] if `absent_days` is negative or
/// exceeds the configured working days.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::calculate_regular_salary;
/// use employee_payroll::config::RegularRates;
///
/// let result = calculate_regular_salary(2, &RegularRates::default(), 1).unwrap();
/// assert_eq!(result.breakdown.net.to_string(), "15781.82");
/// ```
pub fn calculate_regular_salary(
    absent_days: i32,
    rates: &RegularRates,
    step_number: u32,
) -> PayrollResult<RegularSalaryResult> {
    if absent_days < 0 {
        return Err(PayrollError::validation(
            "absentDays",
            "must not be negative",
        ));
    }
    let absent = absent_days as u32;
    if absent > rates.working_days {
        return Err(PayrollError::validation(
            "absentDays",
            format!("cannot exceed {} working days", rates.working_days),
        ));
    }

    let base = rates.base_salary;
    let daily_share = base / Decimal::from(rates.working_days);
    let deduction = if absent > 0 {
        daily_share * Decimal::from(absent)
    } else {
        Decimal::ZERO
    };
    let tax = base * rates.tax_rate;
    let net = round_money(base - deduction - tax);

    let deduction_step = AuditStep {
        step_number,
        rule_id: "absence_deduction".to_string(),
        rule_name: "Absence Deduction".to_string(),
        input: serde_json::json!({
            "base_salary": base.to_string(),
            "working_days": rates.working_days,
            "absent_days": absent
        }),
        output: serde_json::json!({
            "deduction": round_money(deduction).to_string(),
            "deduction_applied": absent > 0
        }),
        reasoning: if absent > 0 {
            format!(
                "${} / {} x {} = ${}",
                base.normalize(),
                rates.working_days,
                absent,
                round_money(deduction)
            )
        } else {
            "No absences - no deduction applied".to_string()
        },
    };

    let tax_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "flat_tax".to_string(),
        rule_name: "Flat Tax".to_string(),
        input: serde_json::json!({
            "base_salary": base.to_string(),
            "tax_rate": rates.tax_rate.to_string()
        }),
        output: serde_json::json!({
            "tax": round_money(tax).to_string()
        }),
        reasoning: format!(
            "${} x {} = ${}",
            base.normalize(),
            rates.tax_rate.normalize(),
            round_money(tax)
        ),
    };

    let net_step = AuditStep {
        step_number: step_number + 2,
        rule_id: "net_salary".to_string(),
        rule_name: "Net Salary".to_string(),
        input: serde_json::json!({
            "base_salary": base.to_string(),
            "deduction": round_money(deduction).to_string(),
            "tax": round_money(tax).to_string()
        }),
        output: serde_json::json!({
            "net": net.to_string()
        }),
        reasoning: format!(
            "${} - ${} - ${} = ${}",
            base.normalize(),
            round_money(deduction),
            round_money(tax),
            net
        ),
    };

    Ok(RegularSalaryResult {
        breakdown: SalaryBreakdown {
            gross: base,
            deduction,
            tax,
            net,
        },
        audit_steps: vec![deduction_step, tax_step, net_step],
    })
}
