//! Tutorial form page.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Serve the tutorial form. Rendering of results happens client-side from
/// the `/api/analyze` JSON response.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
