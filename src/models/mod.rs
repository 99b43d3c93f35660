// Data models and DTOs

pub mod employee;

pub use employee::{Employee, EmployeeId, NewEmployee};
