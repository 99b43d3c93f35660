//! Record store abstraction for employee data access.
//!
//! This module provides:
//! - The `EmployeeStore` trait consumed by the service layer
//! - `StoreError`, the failure type shared by every store implementation

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Employee, EmployeeId, NewEmployee};

/// PostgreSQL SQLSTATE for unique constraint violations
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return StoreError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        StoreError::Database(err)
    }
}

/// Key-based lookup and persistence of employee records
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError>;

    /// Find employee by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError>;

    /// All employees, ordered by ID
    async fn find_all(&self) -> Result<Vec<Employee>, StoreError>;

    /// Persist a new employee, assigning its ID
    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, StoreError>;

    /// Overwrite the record stored under `employee.id`, creating it if missing
    async fn save(&self, employee: &Employee) -> Result<Employee, StoreError>;

    /// Delete by ID. Deleting an absent ID is not an error.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), StoreError>;

    /// Check the store is reachable
    async fn ping(&self) -> Result<(), StoreError>;
}
