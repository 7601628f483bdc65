//! Lenient JSON body extractor.

use crate::errors::AppError;
use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body where an absent or blank body means `T::default()`.
///
/// Unlike [`axum::Json`] the `Content-Type` header is not required; partial
/// updates are commonly sent without a body at all. Malformed JSON still
/// rejects with the status axum assigns to the underlying `JsonRejection`.
pub struct JsonPayload<T>(pub T);

impl<T, S> FromRequest<S> for JsonPayload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonPayload(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(JsonPayload(value))
    }
}
