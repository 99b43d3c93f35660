pub mod employees;
pub mod extractors;
pub mod health;
pub mod response;

// Re-export commonly used types
pub use employees::employee_routes;
pub use extractors::{IdPath, ValidatedJson};
pub use response::{Created, MessageResponse};
