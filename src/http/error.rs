use thiserror::Error;

use crate::http::parser::ParseError;
use crate::http::response::StatusCode;

/// Per-request failures. Each one is answered with its error page and the
/// connection stays open.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("bad request: {0}")]
    BadRequest(#[from] ParseError),
    #[error("missing Host header")]
    MissingHost,
    #[error("visit limit reached (cookie_counter={0})")]
    Forbidden(u8),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method {0} not allowed")]
    MethodNotAllowed(&'static str),
    #[error("HTTP version {0} not supported")]
    VersionNotSupported(String),
}

impl RequestError {
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::BadRequest(_) | RequestError::MissingHost => StatusCode::BadRequest,
            RequestError::Forbidden(_) => StatusCode::Forbidden,
            RequestError::NotFound(_) => StatusCode::NotFound,
            RequestError::MethodNotAllowed(_) => StatusCode::MethodNotAllowed,
            RequestError::VersionNotSupported(_) => StatusCode::HttpVersionNotSupported,
        }
    }
}
