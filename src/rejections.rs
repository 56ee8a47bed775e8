use std::fmt::Display;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Request,
    },
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::names;

/// Failure of a request. The context string is logged, never sent: clients
/// only see the status code and its fixed message.
#[derive(Debug)]
pub enum AppError {
    BadRequest(&'static str),
    NotFound(&'static str),
    MethodNotAllowed,
    Input(&'static str),
    Internal(&'static str),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Input(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => names::BAD_REQUEST_MESSAGE,
            AppError::NotFound(_) => names::NOT_FOUND_MESSAGE,
            AppError::MethodNotAllowed => names::METHOD_NOT_ALLOWED_MESSAGE,
            AppError::Input(_) => names::UNPROCESSABLE_MESSAGE,
            AppError::Internal(_) => names::INTERNAL_ERROR_MESSAGE,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(error = ?self, "responding with {status}");

        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("rejected JSON body: {rejection}");
        match rejection {
            // Well-formed JSON that does not fit the expected fields
            JsonRejection::JsonDataError(_) => AppError::Input("JSON body has the wrong shape"),
            _ => AppError::BadRequest("could not read JSON body"),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("rejected query string: {rejection}");
        AppError::BadRequest("could not parse query string")
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("rejected path parameter: {rejection}");
        AppError::NotFound("path parameter does not name a resource")
    }
}

/// Maps store and other fallible results to an [`AppError`], logging the cause.
pub trait ResultExt<T> {
    /// Unexpected failure, reported as 500.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;

    /// Failure caused by the submitted data, reported as 422.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::warn!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}

/// Fallback for paths that match no route.
pub async fn not_found() -> AppError {
    AppError::NotFound("no route for path")
}

/// Give the router's bare 405 responses the JSON error body.
pub async fn method_not_allowed(req: Request, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() == StatusCode::METHOD_NOT_ALLOWED {
        return AppError::MethodNotAllowed.into_response();
    }
    response
}
