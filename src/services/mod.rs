// Business logic services

pub mod employee_service;
pub mod health_check;

pub use employee_service::{EmployeeError, EmployeeService};
pub use health_check::HealthChecker;
