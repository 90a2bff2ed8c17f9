//! Employee persistence.
//!
//! The [`EmployeeStore`] trait is the narrow interface the service talks to.
//! It knows nothing about business rules beyond identity assignment and the
//! soft-delete flag; visibility rules live in the service.
//!
//! Two backends are provided:
//!
//! - [`InMemoryEmployeeStore`]: a map behind an async lock, used in tests
//!   and for throwaway servers
//! - [`JsonFileEmployeeStore`]: the same map, rewritten to a JSON file after
//!   every mutation

mod file;
mod memory;
mod state;

use async_trait::async_trait;

use crate::error::PayrollResult;
use crate::models::{Employee, EmployeeId};

pub use file::JsonFileEmployeeStore;
pub use memory::InMemoryEmployeeStore;

/// Storage backend for employee records.
///
/// Every id-taking method reports a missing record as
/// [`PayrollError::EmployeeNotFound`](crate::error::PayrollError::EmployeeNotFound);
/// backend failures surface as
/// [`PayrollError::Storage`](crate::error::PayrollError::Storage).
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Returns every record, deleted or not, ordered by id.
    async fn list(&self) -> PayrollResult<Vec<Employee>>;

    /// Returns the records that are not soft-deleted, ordered by id.
    async fn list_active(&self) -> PayrollResult<Vec<Employee>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(Employee::is_active)
            .collect())
    }

    /// Returns the record with the given id, deleted or not.
    async fn get(&self, id: EmployeeId) -> PayrollResult<Employee>;

    /// Stores a new record and returns it with its assigned id.
    ///
    /// The incoming id is ignored. The new id is one greater than every id
    /// the store has ever assigned, so ids of deleted records are never
    /// reused. The record is stored as not deleted.
    async fn create(&self, employee: Employee) -> PayrollResult<Employee>;

    /// Replaces the record with the same id.
    ///
    /// A record that is already deleted stays deleted.
    async fn update(&self, employee: Employee) -> PayrollResult<Employee>;

    /// Soft-deletes the record. Fails if it is absent or already deleted.
    async fn mark_deleted(&self, id: EmployeeId) -> PayrollResult<()>;
}
