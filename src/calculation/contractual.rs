//! Contractual employee salary calculation.

use rust_decimal::Decimal;

use crate::config::ContractualRates;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{AuditStep, SalaryBreakdown};

use super::rounding::round_money;

/// The result of a contractual salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ContractualSalaryResult {
    /// Amount components. No deduction or tax applies.
    pub breakdown: SalaryBreakdown,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the pay of a contractual employee: daily rate x days worked.
///
/// # Errors
///
/// Returns [`PayrollError::Validation`] if `worked_days` is negative or the
/// resulting pay is too large to represent.
///
/// # Examples
///
/// ```
/// use employee_payroll::calculation::calculate_contractual_salary;
/// use employee_payroll::config::ContractualRates;
///
/// let result = calculate_contractual_salary(10, &ContractualRates::default(), 1).unwrap();
/// assert_eq!(result.breakdown.net.to_string(), "5000.00");
/// ```
pub fn calculate_contractual_salary(
    worked_days: i32,
    rates: &ContractualRates,
    step_number: u32,
) -> PayrollResult<ContractualSalaryResult> {
    if worked_days < 0 {
        return Err(PayrollError::validation(
            "workedDays",
            "must not be negative",
        ));
    }

    let gross = rates
        .daily_rate
        .checked_mul(Decimal::from(worked_days))
        .ok_or_else(|| {
            PayrollError::validation("workedDays", "pay exceeds the representable amount")
        })?;
    let net = round_money(gross);

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_rate".to_string(),
        rule_name: "Daily Rate".to_string(),
        input: serde_json::json!({
            "daily_rate": rates.daily_rate.to_string(),
            "worked_days": worked_days
        }),
        output: serde_json::json!({
            "net": net.to_string()
        }),
        reasoning: format!(
            "${} x {} days = ${}",
            rates.daily_rate.normalize(),
            worked_days,
            net
        ),
    };

    Ok(ContractualSalaryResult {
        breakdown: SalaryBreakdown {
            gross: net,
            deduction: Decimal::ZERO,
            tax: Decimal::ZERO,
            net,
        },
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_ten_days_at_default_rate() {
        let result = calculate_contractual_salary(10, &ContractualRates::default(), 1).unwrap();

        assert_eq!(result.breakdown.net.to_string(), "5000.00");
        assert_eq!(result.breakdown.gross, result.breakdown.net);
        assert_eq!(result.breakdown.tax, Decimal::ZERO);
        assert_eq!(result.audit_step.rule_id, "daily_rate");
        assert!(result.audit_step.reasoning.contains("$500 x 10 days = $5000.00"));
    }

    #[test]
    fn test_zero_days_pays_nothing() {
        let result = calculate_contractual_salary(0, &ContractualRates::default(), 1).unwrap();
        assert_eq!(result.breakdown.net.to_string(), "0.00");
    }

    #[test]
    fn test_fractional_rate_rounds_to_cents() {
        let rates = ContractualRates {
            daily_rate: dec("333.335"),
        };
        let result = calculate_contractual_salary(1, &rates, 1).unwrap();
        assert_eq!(result.breakdown.net, dec("333.34"));
    }

    #[test]
    fn test_overflowing_pay_rejected() {
        let rates = ContractualRates {
            daily_rate: dec("79228162514264337593543950"),
        };
        let result = calculate_contractual_salary(100_000, &rates, 1);

        match result {
            Err(PayrollError::Validation { field, message }) => {
                assert_eq!(field, "workedDays");
                assert!(message.contains("representable"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_days_rejected() {
        let result = calculate_contractual_salary(-3, &ContractualRates::default(), 1);

        match result {
            Err(PayrollError::Validation { field, .. }) => assert_eq!(field, "workedDays"),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }
}
