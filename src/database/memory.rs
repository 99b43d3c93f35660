//! In-memory employee store.
//!
//! Keeps records in a map keyed by ID and enforces the same email uniqueness
//! rule as the `employees_email_key` constraint in PostgreSQL. Used by tests
//! and by `STORE_BACKEND=memory` for running without a database.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::repository::{EmployeeStore, StoreError};
use crate::models::{Employee, EmployeeId, NewEmployee};

const EMAIL_CONSTRAINT: &str = "employees_email_key";

#[derive(Debug, Default)]
struct Records {
    rows: BTreeMap<EmployeeId, Employee>,
    last_id: EmployeeId,
}

impl Records {
    fn email_taken(&self, email: &str, except: Option<EmployeeId>) -> bool {
        self.rows
            .values()
            .any(|row| row.email == email && Some(row.id) != except)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryEmployeeStore {
    records: Arc<RwLock<Records>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl EmployeeStore for InMemoryEmployeeStore {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        Ok(self.records.read().await.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        let records = self.records.read().await;
        Ok(records.rows.values().find(|row| row.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.records.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, StoreError> {
        let mut records = self.records.write().await;
        if records.email_taken(&employee.email, None) {
            return Err(StoreError::UniqueViolation {
                constraint: EMAIL_CONSTRAINT.to_string(),
            });
        }

        records.last_id += 1;
        let stored = Employee::from_payload(records.last_id, employee.clone());
        records.rows.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, StoreError> {
        let mut records = self.records.write().await;
        if records.email_taken(&employee.email, Some(employee.id)) {
            return Err(StoreError::UniqueViolation {
                constraint: EMAIL_CONSTRAINT.to_string(),
            });
        }

        records.last_id = records.last_id.max(employee.id);
        records.rows.insert(employee.id, employee.clone());
        Ok(employee.clone())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), StoreError> {
        self.records.write().await.rows.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
