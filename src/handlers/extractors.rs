//! Common extractors for API handlers.
//!
//! Both extractors reject with `ApiError`, so malformed input gets the same
//! structured error envelope as every other failure.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{handle_path_rejection, handle_rejection, ApiError};
use crate::models::EmployeeId;

/// JSON body that has been deserialized and passed `validator` checks
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(handle_rejection)?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Numeric `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub EmployeeId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<EmployeeId>::from_request_parts(parts, state)
            .await
            .map_err(handle_path_rejection)?;
        Ok(IdPath(id))
    }
}
