//! Integer path id extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

/// Single `{id}` path segment parsed as `i64`.
///
/// A segment that is not an integer can never name a stored record, so it is
/// rejected as not found rather than as a bad request.
///
/// ```ignore
/// async fn show(IdPath(id): IdPath) -> String {
///     format!("item {id}")
/// }
///
/// let app = Router::new().route("/items/{id}", get(show));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        raw.parse::<i64>()
            .map(IdPath)
            .map_err(|_| AppError::NotFound(format!("Couldn't find record with 'id'={}", raw)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    async fn echo(IdPath(id): IdPath) -> String {
        id.to_string()
    }

    async fn status_for(uri: &str) -> StatusCode {
        Router::new()
            .route("/items/{id}", get(echo))
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn parses_integer_ids() {
        assert_eq!(status_for("/items/42").await, StatusCode::OK);
        assert_eq!(status_for("/items/-1").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn non_integer_ids_are_not_found() {
        assert_eq!(status_for("/items/abc").await, StatusCode::NOT_FOUND);
        assert_eq!(status_for("/items/1.5").await, StatusCode::NOT_FOUND);
    }
}
