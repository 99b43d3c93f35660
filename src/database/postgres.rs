//! PostgreSQL-backed employee store.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use super::repository::{EmployeeStore, StoreError};
use crate::models::{Employee, EmployeeId, NewEmployee};

#[derive(Clone)]
pub struct PgEmployeeStore {
    db_pool: PgPool,
}

impl PgEmployeeStore {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl EmployeeStore for PgEmployeeStore {
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, StoreError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(employee)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, StoreError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, first_name, last_name, email FROM employees ORDER BY id",
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(employees)
    }

    async fn insert(&self, employee: &NewEmployee) -> Result<Employee, StoreError> {
        let stored = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.db_pool)
        .await?;

        debug!(employee_id = stored.id, "Inserted employee row");
        Ok(stored)
    }

    async fn save(&self, employee: &Employee) -> Result<Employee, StoreError> {
        // Explicit ids do not advance the BIGSERIAL sequence; callers only
        // save ids the store handed out.
        let stored = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employees (id, first_name, last_name, email)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(employee.id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.email)
        .fetch_one(&self.db_pool)
        .await?;

        debug!(employee_id = stored.id, "Saved employee row");
        Ok(stored)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        debug!(employee_id = id, rows = result.rows_affected(), "Deleted employee row");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.db_pool).await?;
        Ok(())
    }
}
