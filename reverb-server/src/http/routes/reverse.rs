//! Reverse endpoint

use axum::{routing::post, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::ReverseInput;

#[derive(Debug, Serialize)]
pub struct ReverseResponse {
    pub reversed: String,
}

/// POST /api/reverse
async fn reverse(JsonBody(body): JsonBody) -> Result<Json<ReverseResponse>, ApiError> {
    let input = ReverseInput::from_body(&body)?;
    Ok(Json(ReverseResponse {
        reversed: input.reversed(),
    }))
}

/// Reverse routes (stateless)
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/api/reverse", post(reverse))
}
