use std::fmt::{Debug, Display};

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};

use crate::store::StoreError;

pub struct ApiError(StoreError);

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not Found: {}", self.0)
    }
}

impl Debug for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Not Found: {:?}", self.0)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(value: StoreError) -> Self {
        Self(value)
    }
}

pub type ApiResult<T> = Result<(StatusCode, Json<T>), ApiError>;
