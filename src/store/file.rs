//! JSON-file-backed employee store.
//!
//! The whole record set lives in memory and is rewritten to disk as a JSON
//! array after each mutation. A mutation is applied to a copy of the state,
//! written out, and only then made visible, so a failed write leaves both the
//! file and the in-memory view unchanged.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeId};

use super::EmployeeStore;
use super::state::StoreState;

/// Employee store persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFileEmployeeStore {
    path: PathBuf,
    state: RwLock<StoreState>,
}

impl JsonFileEmployeeStore {
    /// Opens the store at `path`, loading existing records if the file exists.
    ///
    /// A missing file is treated as an empty store and is created on the
    /// first write, along with any missing parent directories.
    pub async fn open<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref().to_path_buf();

        let exists = fs::try_exists(&path)
            .await
            .map_err(|e| storage_error(&path, "check", e))?;

        let records: Vec<Employee> = if exists {
            let bytes = fs::read(&path)
                .await
                .map_err(|e| storage_error(&path, "read", e))?;
            serde_json::from_slice(&bytes).map_err(|e| {
                PayrollError::storage(format!("failed to parse {}: {}", path.display(), e))
            })?
        } else {
            Vec::new()
        };

        let state = StoreState::try_from_records(records).map_err(|id| {
            PayrollError::storage(format!("duplicate employee id {} in {}", id, path.display()))
        })?;
        info!(
            path = %path.display(),
            records = state.list().len(),
            last_id = state.last_id(),
            "Opened employee file store"
        );

        Ok(Self {
            path,
            state: RwLock::new(state),
        })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Applies `change` to a copy of the state, persists it, then commits.
    async fn mutate<T>(
        &self,
        change: impl FnOnce(&mut StoreState) -> PayrollResult<T> + Send,
    ) -> PayrollResult<T> {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let value = change(&mut next)?;
        self.persist(&next).await?;
        *guard = next;
        Ok(value)
    }

    async fn persist(&self, state: &StoreState) -> PayrollResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| storage_error(parent, "create directory", e))?;
        }

        let bytes = serde_json::to_vec_pretty(&state.list())
            .map_err(|e| PayrollError::storage(format!("failed to serialize employees: {e}")))?;

        let tmp_path = self.path.with_extension("tmp");
        fs::write(&tmp_path, &bytes)
            .await
            .map_err(|e| storage_error(&tmp_path, "write", e))?;
        fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|e| storage_error(&self.path, "replace", e))?;

        debug!(path = %self.path.display(), bytes = bytes.len(), "Persisted employees");
        Ok(())
    }
}

fn storage_error(path: &Path, action: &str, error: std::io::Error) -> PayrollError {
    PayrollError::storage(format!("failed to {} {}: {}", action, path.display(), error))
}

#[async_trait]
impl EmployeeStore for JsonFileEmployeeStore {
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
        self.mutate(|state| state.insert(employee)).await
    }

    async fn update(&self, employee: Employee) -> PayrollResult<Employee> {
        self.mutate(|state| state.replace(employee)).await
    }

    async fn mark_deleted(&self, id: EmployeeId) -> PayrollResult<()> {
        self.mutate(|state| state.mark_deleted(id)).await
    }
}
