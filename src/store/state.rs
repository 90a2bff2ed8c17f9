//! Record map shared by the store backends.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::warn;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeId};

/// Employee records keyed by id, plus the highest id ever assigned.
///
/// `last_id` only grows. Records are never removed, so it always equals the
/// largest key, but it is tracked separately so new ids never depend on
/// which records happen to be visible.
#[derive(Debug, Clone, Default)]
pub(crate) struct StoreState {
    records: BTreeMap<EmployeeId, Employee>,
    last_id: EmployeeId,
}

impl StoreState {
    /// Builds state from existing records. Later duplicates of an id win,
    /// and each replaced record is logged.
    pub(crate) fn from_records(records: impl IntoIterator<Item = Employee>) -> Self {
        let mut map = BTreeMap::new();
        for employee in records {
            let id = employee.id;
            if let Some(replaced) = map.insert(id, employee) {
                warn!(
                    employee_id = id,
                    replaced_name = %replaced.full_name,
                    "Duplicate employee id; keeping the later record"
                );
            }
        }
        Self::with_map(map)
    }

    /// Builds state from persisted records. Fails with the first id that
    /// appears more than once.
    pub(crate) fn try_from_records(
        records: impl IntoIterator<Item = Employee>,
    ) -> Result<Self, EmployeeId> {
        let mut map = BTreeMap::new();
        for employee in records {
            match map.entry(employee.id) {
                Entry::Vacant(slot) => {
                    slot.insert(employee);
                }
                Entry::Occupied(slot) => return Err(*slot.key()),
            }
        }
        Ok(Self::with_map(map))
    }

    fn with_map(records: BTreeMap<EmployeeId, Employee>) -> Self {
        let last_id = records.keys().next_back().copied().unwrap_or(0).max(0);
        Self { records, last_id }
    }

    pub(crate) fn list(&self) -> Vec<Employee> {
        self.records.values().cloned().collect()
    }

    pub(crate) fn list_active(&self) -> Vec<Employee> {
        self.records
            .values()
            .filter(|e| e.is_active())
            .cloned()
            .collect()
    }

    pub(crate) fn get(&self, id: EmployeeId) -> PayrollResult<Employee> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(PayrollError::EmployeeNotFound { id })
    }

    /// Stores `employee` under the next id, ignoring the id it carries.
    ///
    /// Fails without changing anything once the id space is used up.
    pub(crate) fn insert(&mut self, mut employee: Employee) -> PayrollResult<Employee> {
        let id = self
            .last_id
            .checked_add(1)
            .ok_or_else(|| PayrollError::storage("employee id space exhausted"))?;
        self.last_id = id;
        employee.id = id;
        employee.is_deleted = false;
        self.records.insert(id, employee.clone());
        Ok(employee)
    }

    /// Replaces the record with the same id. A deleted record stays deleted.
    pub(crate) fn replace(&mut self, mut employee: Employee) -> PayrollResult<Employee> {
        let existing = self
            .records
            .get_mut(&employee.id)
            .ok_or(PayrollError::EmployeeNotFound { id: employee.id })?;
        employee.is_deleted |= existing.is_deleted;
        *existing = employee.clone();
        Ok(employee)
    }

    /// Flags the record as deleted. Fails if absent or already deleted.
    pub(crate) fn mark_deleted(&mut self, id: EmployeeId) -> PayrollResult<()> {
        match self.records.get_mut(&id) {
            Some(employee) if employee.is_active() => {
                employee.is_deleted = true;
                Ok(())
            }
            _ => Err(PayrollError::EmployeeNotFound { id }),
        }
    }

    pub(crate) fn last_id(&self) -> EmployeeId {
        self.last_id
    }
}
