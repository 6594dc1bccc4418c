//! Single-page form client served at `/`
//!
//! The page is compiled into the binary. It posts to `/api/reverse` and
//! renders either the reversed text or the error message.

use axum::{response::Html, routing::get, Router};

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_posts_to_reverse() {
        assert!(INDEX_HTML.contains("/api/reverse"));
        assert!(INDEX_HTML.contains("<form"));
    }
}
