use crate::api::ApiReply;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use application::error::AppError;
use application::query::QueryError;
use domain::field::FieldError;
use log::{error, warn};
use thiserror::Error;

/// JSON API 错误，响应体与成功时同为 `{success, message}`
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ApiError(#[from] AppError);

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError(err.into())
    }
}

impl From<QueryError> for ApiError {
    fn from(err: QueryError) -> Self {
        ApiError(err.into())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            AppError::InvalidInput(_) | AppError::UnknownField(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!("API request failed: {}", self.0);
        } else {
            warn!("API request rejected: {}", self.0);
        }
        HttpResponse::build(status).json(ApiReply::failure(self.0.to_string()))
    }
}
