use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Identifier assigned by the store when an employee is first persisted.
pub type EmployeeId = i64;

/// A persisted employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Employee {
    #[schema(example = 1)]
    pub id: EmployeeId,
    #[schema(example = "Andrea")]
    pub first_name: String,
    #[schema(example = "Ramirez")]
    pub last_name: String,
    #[schema(example = "andrea@gmail.com")]
    pub email: String,
}

impl Employee {
    /// Build the record stored under `id` from a request payload.
    pub fn from_payload(id: EmployeeId, payload: NewEmployee) -> Self {
        Self {
            id,
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
        }
    }
}

/// Employee fields accepted on create and update.
///
/// An `id` sent by the client is ignored; identity comes from the store on
/// create and from the path on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewEmployee {
    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Andrea")]
    pub first_name: String,

    #[validate(length(min = 1, max = 100))]
    #[schema(example = "Ramirez")]
    pub last_name: String,

    #[validate(email, length(max = 255))]
    #[schema(example = "andrea@gmail.com")]
    pub email: String,
}

impl NewEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}
