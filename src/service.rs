//! Employee service.
//!
//! The service is the only caller of the store. It enforces that
//! soft-deleted employees are invisible to every normal operation, validates
//! incoming drafts, and hands active employees to the salary calculator.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_salary, format_amount};
use crate::config::PayrollConfig;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    CalculationInput, Employee, EmployeeDraft, EmployeeId, EmployeeType, SalaryResult,
};
use crate::store::EmployeeStore;

/// Employee lifecycle and salary operations over an [`EmployeeStore`].
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
    config: Arc<PayrollConfig>,
}

impl EmployeeService {
    /// Creates a service over the given store and salary rates.
    pub fn new(store: Arc<dyn EmployeeStore>, config: PayrollConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Returns the salary rates in use.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns every employee that has not been soft-deleted.
    pub async fn list_active(&self) -> PayrollResult<Vec<Employee>> {
        self.store.list_active().await
    }

    /// Returns the employee with the given id if it exists and is active.
    pub async fn get_active(&self, id: EmployeeId) -> PayrollResult<Employee> {
        let employee = self.store.get(id).await?;
        if employee.is_deleted {
            return Err(PayrollError::EmployeeNotFound { id });
        }
        Ok(employee)
    }

    /// Validates the draft and stores it as a new active employee.
    pub async fn create_employee(&self, draft: EmployeeDraft) -> PayrollResult<Employee> {
        let draft = validate_draft(draft)?;
        let created = self.store.create(Employee::from_draft(draft)).await?;
        info!(
            employee_id = created.id,
            employee_type_id = created.employee_type_id,
            "Employee created"
        );
        Ok(created)
    }

    /// Overwrites every writable field of an active employee.
    ///
    /// Deleted employees are reported as not found.
    pub async fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
    ) -> PayrollResult<Employee> {
        let mut employee = self.get_active(id).await?;
        let draft = validate_draft(draft)?;
        employee.apply(draft);
        let updated = self.store.update(employee).await?;
        info!(employee_id = id, "Employee updated");
        Ok(updated)
    }

    /// Soft-deletes an active employee and returns its id.
    pub async fn delete_employee(&self, id: EmployeeId) -> PayrollResult<EmployeeId> {
        self.get_active(id).await?;
        self.store.mark_deleted(id).await?;
        info!(employee_id = id, "Employee soft-deleted");
        Ok(id)
    }

    /// Calculates the salary of an active employee for the given period inputs.
    pub async fn calculate_salary(
        &self,
        id: EmployeeId,
        input: CalculationInput,
    ) -> PayrollResult<SalaryResult> {
        let employee = self.get_active(id).await?;

        let computation = calculate_salary(employee.employee_type_id, &input, &self.config)
            .inspect_err(|err| {
                warn!(
                    employee_id = id,
                    employee_type_id = employee.employee_type_id,
                    error = %err,
                    "Salary calculation rejected"
                );
            })?;

        let amount = computation.breakdown.net;
        info!(
            employee_id = id,
            employee_type = computation.employee_type.as_str(),
            amount = %amount,
            "Salary calculated"
        );

        Ok(SalaryResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            employee_id: id,
            employee_type: computation.employee_type,
            amount,
            formatted_amount: format_amount(amount),
            breakdown: computation.breakdown,
            audit_steps: computation.audit_steps,
        })
    }
}

/// Checks a draft and normalizes its name.
fn validate_draft(mut draft: EmployeeDraft) -> PayrollResult<EmployeeDraft> {
    let trimmed = draft.full_name.trim();
    if trimmed.is_empty() {
        return Err(PayrollError::validation("fullName", "must not be empty"));
    }
    if trimmed.len() != draft.full_name.len() {
        draft.full_name = trimmed.to_string();
    }

    if EmployeeType::from_id(draft.employee_type_id).is_none() {
        return Err(PayrollError::validation(
            "employeeTypeId",
            format!("unknown employee type {}", draft.employee_type_id),
        ));
    }

    Ok(draft)
}
