use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::database::{EmployeeStore, StoreError};
use crate::middleware::metrics::track_employee_operation;
use crate::models::{Employee, EmployeeId, NewEmployee};

#[derive(Debug, Error)]
pub enum EmployeeError {
    #[error("An employee with email {email} already exists")]
    DuplicateEmail { email: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Employee directory operations over a record store.
///
/// The only rule enforced here is email uniqueness on create. Everything else
/// is delegated to the store unchanged.
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    /// Create a new employee.
    /// Fails with `DuplicateEmail` without writing when the email is taken.
    pub async fn create(&self, employee: NewEmployee) -> Result<Employee, EmployeeError> {
        if self.store.find_by_email(&employee.email).await?.is_some() {
            warn!(email = %employee.email, "Rejected employee with duplicate email");
            track_employee_operation("create", false);
            return Err(EmployeeError::DuplicateEmail {
                email: employee.email,
            });
        }

        // A concurrent create can still win the race; the store constraint catches it
        let stored = self
            .store
            .insert(&employee)
            .await
            .map_err(|e| {
                track_employee_operation("create", false);
                duplicate_or_store(e, &employee.email)
            })?;

        info!(employee_id = stored.id, "Employee created");
        track_employee_operation("create", true);
        Ok(stored)
    }

    /// All employees in store order
    pub async fn list(&self) -> Result<Vec<Employee>, EmployeeError> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, EmployeeError> {
        Ok(self.store.find_by_id(id).await?)
    }

    /// Persist `employee` as given. The caller resolves the ID beforehand.
    pub async fn update(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let stored = self
            .store
            .save(&employee)
            .await
            .map_err(|e| {
                track_employee_operation("update", false);
                duplicate_or_store(e, &employee.email)
            })?;

        info!(employee_id = stored.id, "Employee updated");
        track_employee_operation("update", true);
        Ok(stored)
    }

    /// Remove the employee if present. Absent IDs are a no-op.
    pub async fn delete(&self, id: EmployeeId) -> Result<(), EmployeeError> {
        self.store.delete_by_id(id).await?;

        debug!(employee_id = id, "Delete applied");
        track_employee_operation("delete", true);
        Ok(())
    }

    /// Reachability of the underlying store
    pub async fn store_health(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }
}

fn duplicate_or_store(err: StoreError, email: &str) -> EmployeeError {
    match err {
        StoreError::UniqueViolation { .. } => EmployeeError::DuplicateEmail {
            email: email.to_string(),
        },
        other => EmployeeError::Store(other),
    }
}
