//! Request types for the employee payroll API.
//!
//! This module defines the JSON request bodies for the employee routes.
//! Field names are camelCase; the short names used by older clients
//! (`tin`, `birthdate`, `typeId`) are accepted as aliases.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{CalculationInput, EmployeeDraft, EmployeeId};

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    #[serde(default, alias = "tin")]
    pub tax_identifier: String,
    /// Date of birth as `yyyy-MM-dd`.
    #[serde(alias = "birthdate")]
    pub birth_date: NaiveDate,
    /// Employee type id.
    #[serde(alias = "typeId")]
    pub employee_type_id: i32,
}

/// Request body for `PUT /employees/{id}`.
///
/// Every field is written; omitted optional fields are cleared rather than
/// kept. `id`, when present, must match the id in the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditEmployeeRequest {
    /// Optional echo of the path id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    #[serde(default, alias = "tin")]
    pub tax_identifier: String,
    /// Date of birth as `yyyy-MM-dd`.
    #[serde(alias = "birthdate")]
    pub birth_date: NaiveDate,
    /// Employee type id.
    #[serde(alias = "typeId")]
    pub employee_type_id: i32,
}

/// Request body for `POST /employees/{id}/calculate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateSalaryRequest {
    /// Days absent in the period (regular employees).
    #[serde(default)]
    pub absent_days: i32,
    /// Days worked in the period (contractual employees).
    #[serde(default)]
    pub worked_days: i32,
}

impl From<CreateEmployeeRequest> for EmployeeDraft {
    fn from(req: CreateEmployeeRequest) -> Self {
        EmployeeDraft {
            full_name: req.full_name,
            tax_identifier: req.tax_identifier,
            birth_date: req.birth_date,
            employee_type_id: req.employee_type_id,
        }
    }
}

impl From<EditEmployeeRequest> for EmployeeDraft {
    fn from(req: EditEmployeeRequest) -> Self {
        EmployeeDraft {
            full_name: req.full_name,
            tax_identifier: req.tax_identifier,
            birth_date: req.birth_date,
            employee_type_id: req.employee_type_id,
        }
    }
}

impl From<CalculateSalaryRequest> for CalculationInput {
    fn from(req: CalculateSalaryRequest) -> Self {
        CalculationInput {
            absent_days: req.absent_days,
            worked_days: req.worked_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_create_request() {
        let json = r#"{
            "fullName": "Jane Doe",
            "taxIdentifier": "123-456-789",
            "birthDate": "1990-01-15",
            "employeeTypeId": 1
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.full_name, "Jane Doe");
        assert_eq!(request.tax_identifier, "123-456-789");
        assert_eq!(
            request.birth_date,
            NaiveDate::from_ymd_opt(1990, 1, 15).unwrap()
        );
        assert_eq!(request.employee_type_id, 1);
    }

    #[test]
    fn test_deserialize_create_request_with_short_aliases() {
        let json = r#"{
            "fullName": "Jane Doe",
            "tin": "987",
            "birthdate": "1990-01-15",
            "typeId": 2
        }"#;

        let request: CreateEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tax_identifier, "987");
        assert_eq!(request.employee_type_id, 2);
    }

    #[test]
    fn test_create_request_rejects_non_iso_date() {
        let json = r#"{
            "fullName": "Jane Doe",
            "birthDate": "15/01/1990",
            "employeeTypeId": 1
        }"#;

        assert!(serde_json::from_str::<CreateEmployeeRequest>(json).is_err());
    }

    #[test]
    fn test_edit_request_id_is_optional() {
        let json = r#"{
            "fullName": "Jane Doe",
            "birthDate": "1990-01-15",
            "employeeTypeId": 1
        }"#;

        let request: EditEmployeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, None);
        assert_eq!(request.tax_identifier, "");
    }

    #[test]
    fn test_calculate_request_conversion() {
        let request: CalculateSalaryRequest =
            serde_json::from_str(r#"{"workedDays": 10}"#).unwrap();

        let input: CalculationInput = request.into();
        assert_eq!(input.absent_days, 0);
        assert_eq!(input.worked_days, 10);
    }

    #[test]
    fn test_edit_request_conversion_drops_id() {
        let request = EditEmployeeRequest {
            id: Some(4),
            full_name: "Jane Doe".to_string(),
            tax_identifier: "1".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            employee_type_id: 2,
        };

        let draft: EmployeeDraft = request.into();
        assert_eq!(draft.full_name, "Jane Doe");
        assert_eq!(draft.employee_type_id, 2);
    }
}
