//! Configuration loading and management for the employee payroll service.
//!
//! This module loads the salary rates used by the calculator from a YAML
//! file. When no file is given, [`PayrollConfig::default`] supplies the
//! standard rates.
//!
//! # Example
//!
//! ```no_run
//! use employee_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Daily rate: {}", config.contractual().daily_rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ContractualRates, PayrollConfig, RegularRates};
