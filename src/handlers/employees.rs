//! Employee Handlers Module
//!
//! CRUD endpoints mounted under `/api/employees`.

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use tracing::info;

use super::extractors::{IdPath, ValidatedJson};
use super::response::{Created, MessageResponse};
use crate::error::{ApiError, Result};
use crate::models::{Employee, NewEmployee};
use crate::AppState;

/// Build employee routes: /, /{id}
pub fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees).post(create_employee))
        .route(
            "/{id}",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

/// Create an employee
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "employees",
    request_body = NewEmployee,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Invalid employee payload"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn create_employee(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<NewEmployee>,
) -> Result<Created<Employee>> {
    info!(email = %payload.email, "Create employee request");

    let employee = state.employee_service.create(payload).await?;
    Ok(Created(employee))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = Vec<Employee>)
    )
)]
pub async fn list_employees(State(state): State<AppState>) -> Result<Json<Vec<Employee>>> {
    let employees = state.employee_service.list().await?;
    Ok(Json(employees))
}

/// Get an employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee found", body = Employee),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<Employee>> {
    state
        .employee_service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Employee"))
}

/// Replace an employee's fields
///
/// The ID must resolve first; an unknown ID is answered with 404 and nothing
/// is written.
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    request_body = NewEmployee,
    responses(
        (status = 200, description = "Employee updated", body = Employee),
        (status = 400, description = "Invalid employee payload"),
        (status = 404, description = "Employee not found"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn update_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<NewEmployee>,
) -> Result<Json<Employee>> {
    let existing = state
        .employee_service
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee"))?;

    let updated = state
        .employee_service
        .update(Employee::from_payload(existing.id, payload))
        .await?;

    Ok(Json(updated))
}

/// Delete an employee
///
/// Succeeds whether or not the employee existed.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "employees",
    params(("id" = i64, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee deleted", body = MessageResponse)
    )
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> Result<Json<MessageResponse>> {
    state.employee_service.delete(id).await?;
    Ok(Json(MessageResponse::success("Employee deleted successfully")))
}
