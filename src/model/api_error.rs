use super::Error;
use rocket::{
    http::{ContentType, Status},
    request::Request,
    response::{self, Responder, Response},
};
use serde_json::json;
use std::io::Cursor;
use tracing::error;

#[derive(Debug)]
pub struct ApiError {
    pub code: u16,
    pub message: String,
    pub error: Option<Error>,
}

impl ApiError {
    pub fn new(code: u16, message: &str, error: Error) -> ApiError {
        ApiError {
            code,
            message: message.to_string(),
            error: Some(error),
        }
    }

    pub fn short(code: u16, message: &str) -> ApiError {
        ApiError {
            code,
            message: message.to_string(),
            error: None,
        }
    }

    pub fn not_found() -> ApiError {
        ApiError::short(404, &Error::NotFound.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        if let Some(error) = self.error {
            error!(%error, uri = %req.uri(), code = self.code, "Error from controller");
        }

        let body = json!({ "error": self.message }).to_string();

        Response::build()
            .header(ContentType::JSON)
            .status(Status::new(self.code))
            .sized_body(body.len(), Cursor::new(body))
            .ok()
    }
}
