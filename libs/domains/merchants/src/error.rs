use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum MerchantError {
    #[error("Merchant not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type MerchantResult<T> = Result<T, MerchantError>;

impl From<MerchantError> for AppError {
    fn from(err: MerchantError) -> Self {
        match err {
            MerchantError::NotFound(id) => {
                AppError::NotFound(format!("Couldn't find Merchant with 'id'={}", id))
            }
            MerchantError::Validation(errors) => AppError::ValidationError(errors),
            MerchantError::Database(e) => AppError::Database(e),
            MerchantError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}
