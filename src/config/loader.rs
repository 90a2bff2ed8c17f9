//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading salary rates
//! from a YAML file.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{PayrollError, PayrollResult};

use super::types::{ContractualRates, PayrollConfig, RegularRates};

/// Loads and provides access to payroll configuration.
///
/// # File Format
///
/// ```text
/// regular:
///   base_salary: "20000.00"
///   working_days: 22
///   tax_rate: "0.12"
/// contractual:
///   daily_rate: "500.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Base salary: {}", loader.regular().base_salary);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if:
    /// - The file is missing
    /// - The file cannot be read as UTF-8 text
    /// - The file contains invalid YAML
    /// - A rate is out of range (see [`PayrollConfig::check`])
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => PayrollError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => PayrollError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        let config: PayrollConfig =
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        config
            .check()
            .map_err(|message| PayrollError::ConfigParseError {
                path: path_str,
                message,
            })?;

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the regular employee rates.
    pub fn regular(&self) -> &RegularRates {
        &self.config.regular
    }

    /// Returns the contractual employee rates.
    pub fn contractual(&self) -> &ContractualRates {
        &self.config.contractual
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/payroll.yaml"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn write_temp_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.regular().base_salary, dec("20000.00"));
        assert_eq!(loader.regular().working_days, 22);
        assert_eq!(loader.regular().tax_rate, dec("0.12"));
        assert_eq!(loader.contractual().daily_rate, dec("500.00"));
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), &PayrollConfig::default());
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/payroll.yaml");

        match result {
            Err(PayrollError::ConfigNotFound { path }) => {
                assert!(path.contains("payroll.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_non_utf8_file_returns_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0x00, 0x80]).unwrap();

        match ConfigLoader::load(file.path()) {
            Err(PayrollError::ConfigParseError { message, .. }) => {
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_directory_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();

        match ConfigLoader::load(dir.path()) {
            Err(PayrollError::ConfigParseError { .. }) => {}
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let file = write_temp_config("regular: [not, a, map");

        match ConfigLoader::load(file.path()) {
            Err(PayrollError::ConfigParseError { .. }) => {}
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_out_of_range_rate_returns_parse_error() {
        let file = write_temp_config(
            r#"
regular:
  base_salary: "20000.00"
  working_days: 0
  tax_rate: "0.12"
"#,
        );

        match ConfigLoader::load(file.path()) {
            Err(PayrollError::ConfigParseError { message, .. }) => {
                assert!(message.contains("working_days"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_uses_default_rates() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.into_config(), PayrollConfig::default());
    }
}
