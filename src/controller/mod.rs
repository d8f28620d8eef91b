pub mod quotation;

use crate::model::ApiError;
use rocket::{catch, http::Status, Request};

#[catch(404)]
pub fn not_found() -> ApiError {
    ApiError::not_found()
}

#[catch(default)]
pub fn default(status: Status, _req: &Request) -> ApiError {
    ApiError::short(status.code, status.reason().unwrap_or("Unknown Error"))
}
