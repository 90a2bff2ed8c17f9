//! In-memory employee store.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeId};

use super::EmployeeStore;
use super::state::StoreState;

/// Employee store held entirely in memory.
///
/// # Example
///
/// ```
/// use employee_payroll::store::{EmployeeStore, InMemoryEmployeeStore};
///
/// let store = InMemoryEmployeeStore::new();
/// let rt = tokio::runtime::Runtime::new().unwrap();
/// assert!(rt.block_on(store.list()).unwrap().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    state: RwLock<StoreState>,
}

impl InMemoryEmployeeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing records, deleted ones included.
    ///
    /// New ids continue after the highest seeded id.
    pub fn with_records(records: impl IntoIterator<Item = Employee>) -> Self {
        Self {
            state: RwLock::new(StoreState::from_records(records)),
        }
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn list(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self.state.read().await.list())
    }

    async fn list_active(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self.state.read().await.list_active())
    }

    async fn get(&self, id: EmployeeId) -> PayrollResult<Employee> {
        self.state.read().await.get(id)
    }

    async fn create(&self, employee: Employee) -> PayrollResult<Employee> {
        let created = self.state.write().await.insert(employee)?;
        debug!(employee_id = created.id, "Stored new employee");
        Ok(created)
    }

    async fn update(&self, employee: Employee) -> PayrollResult<Employee> {
        self.state.write().await.replace(employee)
    }

    async fn mark_deleted(&self, id: EmployeeId) -> PayrollResult<()> {
        self.state.write().await.mark_deleted(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PayrollError;
    use chrono::NaiveDate;

    fn new_employee(name: &str) -> Employee {
        Employee {
            id: 0,
            full_name: name.to_string(),
            tax_identifier: "000-000-000".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
            employee_type_id: 1,
            is_deleted: false,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryEmployeeStore::new();

        let first = store.create(new_employee("A")).await.unwrap();
        let second = store.create(new_employee("B")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_create_ignores_incoming_id_and_deleted_flag() {
        let store = InMemoryEmployeeStore::new();
        let mut employee = new_employee("A");
        employee.id = 500;
        employee.is_deleted = true;

        let created = store.create(employee).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(!created.is_deleted);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_deleting_highest() {
        let store = InMemoryEmployeeStore::new();
        store.create(new_employee("A")).await.unwrap();
        let second = store.create(new_employee("B")).await.unwrap();
        store.mark_deleted(second.id).await.unwrap();

        let third = store.create(new_employee("C")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_seeded_store_continues_after_highest_id() {
        let mut seeded = new_employee("Legacy");
        seeded.id = 41;
        seeded.is_deleted = true;
        let store = InMemoryEmployeeStore::with_records(vec![seeded]);

        let created = store.create(new_employee("New")).await.unwrap();
        assert_eq!(created.id, 42);
    }

    #[tokio::test]
    async fn test_create_after_max_id_returns_storage_error() {
        let mut seeded = new_employee("Last");
        seeded.id = EmployeeId::MAX;
        let store = InMemoryEmployeeStore::with_records(vec![seeded]);

        let result = store.create(new_employee("Overflow")).await;

        assert!(matches!(result, Err(PayrollError::Storage { .. })));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_returns_deleted_records_but_list_active_does_not() {
        let store = InMemoryEmployeeStore::new();
        let a = store.create(new_employee("A")).await.unwrap();
        store.create(new_employee("B")).await.unwrap();
        store.mark_deleted(a.id).await.unwrap();

        assert_eq!(store.list().await.unwrap().len(), 2);
        let active = store.list_active().await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].full_name, "B");
    }

    #[tokio::test]
    async fn test_get_returns_deleted_record() {
        let store = InMemoryEmployeeStore::new();
        let a = store.create(new_employee("A")).await.unwrap();
        store.mark_deleted(a.id).await.unwrap();

        let fetched = store.get(a.id).await.unwrap();
        assert!(fetched.is_deleted);
    }

    #[tokio::test]
    async fn test_get_missing_returns_not_found() {
        let store = InMemoryEmployeeStore::new();
        assert!(matches!(
            store.get(7).await,
            Err(PayrollError::EmployeeNotFound { id: 7 })
        ));
    }

    #[tokio::test]
    async fn test_update_missing_returns_not_found() {
        let store = InMemoryEmployeeStore::new();
        let mut employee = new_employee("Ghost");
        employee.id = 3;

        assert!(matches!(
            store.update(employee).await,
            Err(PayrollError::EmployeeNotFound { id: 3 })
        ));
    }

    #[tokio::test]
    async fn test_update_replaces_record() {
        let store = InMemoryEmployeeStore::new();
        let mut employee = store.create(new_employee("A")).await.unwrap();
        employee.full_name = "A2".to_string();

        store.update(employee.clone()).await.unwrap();
        assert_eq!(store.get(employee.id).await.unwrap(), employee);
    }

    #[tokio::test]
    async fn test_mark_deleted_missing_or_repeated_returns_not_found() {
        let store = InMemoryEmployeeStore::new();
        let a = store.create(new_employee("A")).await.unwrap();

        assert!(store.mark_deleted(a.id).await.is_ok());
        assert!(matches!(
            store.mark_deleted(a.id).await,
            Err(PayrollError::EmployeeNotFound { .. })
        ));
        assert!(matches!(
            store.mark_deleted(99).await,
            Err(PayrollError::EmployeeNotFound { id: 99 })
        ));
    }
}
