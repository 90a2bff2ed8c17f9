//! Employee model and related types.
//!
//! This module defines the Employee record, the EmployeeType enum used for
//! salary dispatch, and the EmployeeDraft payload used to create and edit
//! records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned employee identity.
pub type EmployeeId = i64;

/// The closed set of employee types that have a salary rule.
///
/// Employee records carry the raw integer type id; [`EmployeeType::from_id`]
/// maps it onto a variant, returning `None` for ids without a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Monthly salaried employee, subject to absence deduction and flat tax.
    Regular,
    /// Paid a daily rate for each day worked.
    Contractual,
}

impl EmployeeType {
    /// Every known employee type.
    pub const ALL: [EmployeeType; 2] = [EmployeeType::Regular, EmployeeType::Contractual];

    /// Returns the integer id stored on employee records for this type.
    pub fn id(self) -> i32 {
        match self {
            EmployeeType::Regular => 1,
            EmployeeType::Contractual => 2,
        }
    }

    /// Maps a stored type id onto a known type.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_payroll::models::EmployeeType;
    ///
    /// assert_eq!(EmployeeType::from_id(1), Some(EmployeeType::Regular));
    /// assert_eq!(EmployeeType::from_id(2), Some(EmployeeType::Contractual));
    /// assert_eq!(EmployeeType::from_id(3), None);
    /// ```
    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    /// Returns the snake_case label used in logs and audit output.
    pub fn as_str(self) -> &'static str {
        match self {
            EmployeeType::Regular => "regular",
            EmployeeType::Contractual => "contractual",
        }
    }
}

/// An employee record.
///
/// Records are never physically removed; deletion flips `is_deleted`, which
/// hides the record from every normal operation while keeping its id
/// reserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Store-assigned identity. Immutable once assigned.
    pub id: EmployeeId,
    /// The employee's full name.
    pub full_name: String,
    /// Tax identification number.
    pub tax_identifier: String,
    /// Date of birth, serialized as `yyyy-MM-dd`.
    pub birth_date: NaiveDate,
    /// Raw employee type id (see [`EmployeeType::from_id`]).
    pub employee_type_id: i32,
    /// Soft-delete flag.
    #[serde(default)]
    pub is_deleted: bool,
}

impl Employee {
    /// Builds a not-yet-stored record from a draft.
    ///
    /// The id is a placeholder; the store assigns the real one on create.
    pub fn from_draft(draft: EmployeeDraft) -> Self {
        Employee {
            id: 0,
            full_name: draft.full_name,
            tax_identifier: draft.tax_identifier,
            birth_date: draft.birth_date,
            employee_type_id: draft.employee_type_id,
            is_deleted: false,
        }
    }

    /// Overwrites every writable field with the draft's values.
    pub fn apply(&mut self, draft: EmployeeDraft) {
        self.full_name = draft.full_name;
        self.tax_identifier = draft.tax_identifier;
        self.birth_date = draft.birth_date;
        self.employee_type_id = draft.employee_type_id;
    }

    /// Returns true if the record has not been soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }

    /// Returns the employee's type, or `None` if the stored id has no rule.
    pub fn employee_type(&self) -> Option<EmployeeType> {
        EmployeeType::from_id(self.employee_type_id)
    }
}

/// The writable fields of an employee, used for both create and edit.
///
/// Edits are full replacements: every field of the draft overwrites the
/// stored value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    /// The employee's full name. Must not be blank.
    pub full_name: String,
    /// Tax identification number.
    #[serde(default)]
    pub tax_identifier: String,
    /// Date of birth.
    pub birth_date: NaiveDate,
    /// Employee type id. Must map to a known [`EmployeeType`].
    pub employee_type_id: i32,
}
