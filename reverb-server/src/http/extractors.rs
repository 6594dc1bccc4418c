//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde_json::Value;

use super::error::ApiError;

/// Request body parsed as arbitrary JSON.
///
/// Unlike `axum::Json` this ignores `Content-Type` and never rejects on
/// shape; the handler validates fields itself. Any failure to read or parse
/// the body becomes [`ApiError::InvalidJson`], except a body over the
/// `DefaultBodyLimit`, which becomes [`ApiError::PayloadTooLarge`].
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::PayloadTooLarge
            } else {
                ApiError::InvalidJson
            }
        })?;

        let value = serde_json::from_slice(&bytes).map_err(|_| ApiError::InvalidJson)?;
        Ok(Self(value))
    }
}
