//! Configuration types for salary calculation.
//!
//! This module contains the strongly-typed rate structures that are
//! deserialized from the YAML configuration file.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rates for regular (monthly salaried) employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegularRates {
    /// Monthly base salary before deductions.
    pub base_salary: Decimal,
    /// Working days in a month, used to derive the daily absence deduction.
    pub working_days: u32,
    /// Flat tax rate applied to the base salary (0.12 = 12%).
    pub tax_rate: Decimal,
}

impl Default for RegularRates {
    fn default() -> Self {
        Self {
            base_salary: Decimal::new(2_000_000, 2),
            working_days: 22,
            tax_rate: Decimal::new(12, 2),
        }
    }
}

/// Rates for contractual (daily paid) employees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractualRates {
    /// Amount paid per day worked.
    pub daily_rate: Decimal,
}

impl Default for ContractualRates {
    fn default() -> Self {
        Self {
            daily_rate: Decimal::new(50_000, 2),
        }
    }
}

/// Salary rates for every employee type.
///
/// Sections omitted from the YAML file fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollConfig {
    /// Regular employee rates.
    #[serde(default)]
    pub regular: RegularRates,
    /// Contractual employee rates.
    #[serde(default)]
    pub contractual: ContractualRates,
}

impl PayrollConfig {
    /// Checks that the rates describe a computable salary.
    ///
    /// Returns a description of the first problem found.
    pub fn check(&self) -> Result<(), String> {
        if self.regular.base_salary.is_sign_negative() {
            return Err("regular.base_salary must not be negative".to_string());
        }
        if self.regular.working_days == 0 {
            return Err("regular.working_days must be greater than zero".to_string());
        }
        if self.regular.tax_rate.is_sign_negative() || self.regular.tax_rate > Decimal::ONE {
            return Err("regular.tax_rate must be between 0 and 1".to_string());
        }
        if self.contractual.daily_rate.is_sign_negative() {
            return Err("contractual.daily_rate must not be negative".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_defaults_match_published_rates() {
        let config = PayrollConfig::default();
        assert_eq!(config.regular.base_salary, dec("20000.00"));
        assert_eq!(config.regular.working_days, 22);
        assert_eq!(config.regular.tax_rate, dec("0.12"));
        assert_eq!(config.contractual.daily_rate, dec("500.00"));
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let yaml = r#"
contractual:
  daily_rate: "650.00"
"#;
        let config: PayrollConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.contractual.daily_rate, dec("650.00"));
        assert_eq!(config.regular, RegularRates::default());
    }

    #[test]
    fn test_check_rejects_zero_working_days() {
        let mut config = PayrollConfig::default();
        config.regular.working_days = 0;
        assert!(config.check().unwrap_err().contains("working_days"));
    }

    #[test]
    fn test_check_rejects_tax_rate_above_one() {
        let mut config = PayrollConfig::default();
        config.regular.tax_rate = dec("1.5");
        assert!(config.check().unwrap_err().contains("tax_rate"));
    }

    #[test]
    fn test_check_rejects_negative_daily_rate() {
        let mut config = PayrollConfig::default();
        config.contractual.daily_rate = dec("-1");
        assert!(config.check().unwrap_err().contains("daily_rate"));
    }
}
