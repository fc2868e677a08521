//! Service-layer error type
//!
//! `ServiceError` bridges store errors (`StoreError`) and the API-layer error
//! (`AppError`) so handlers can use `?` on both.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};

use crate::db::StoreError;

/// - `Store`: persistence failures (logged, mapped to a 5xx)
/// - `App`: request-level errors such as not-found (passed through)
#[derive(Debug)]
pub enum ServiceError {
    Store(StoreError),
    App(AppError),
}

impl From<StoreError> for ServiceError {
    fn from(e: StoreError) -> Self {
        ServiceError::Store(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Store(StoreError::Corrupt { id, source }) => {
                tracing::error!(order_id = id, error = %source, "Stored order is corrupt");
                AppError::new(ErrorCode::StorageCorrupted).with_detail("id", id)
            }
            ServiceError::Store(StoreError::Database(db_err)) => {
                tracing::error!(error = %db_err, "Order store error");
                AppError::new(ErrorCode::DatabaseError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
