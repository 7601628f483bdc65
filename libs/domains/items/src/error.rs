use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use domain_merchants::MerchantError;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Item not found: {0}")]
    NotFound(i64),

    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Merchant lookup failed: {0}")]
    Merchant(#[from] MerchantError),

    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::NotFound(id) => {
                AppError::NotFound(format!("Couldn't find Item with 'id'={}", id))
            }
            ItemError::Validation(errors) => AppError::ValidationError(errors),
            ItemError::Merchant(e) => e.into(),
            ItemError::Database(e) => AppError::Database(e),
            ItemError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn status_codes() {
        let cases = [
            (ItemError::NotFound(1), StatusCode::NOT_FOUND),
            (
                ItemError::Validation(ValidationErrors::new()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ItemError::Internal("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ItemError::Merchant(MerchantError::NotFound(2)),
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn not_found_message_names_the_id() {
        let (_, body) = AppError::from(ItemError::NotFound(42)).to_parts();
        assert_eq!(body.message, "Couldn't find Item with 'id'=42");
    }
}
