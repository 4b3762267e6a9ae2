use axum::response::Html;

const HISTORY_PAGE: &str = include_str!("../../static/history.html");

/// History page
///
/// GET /history
///
/// Self-contained page; all state lives in the browser and is loaded from
/// the `/api/history` endpoints.
pub async fn history_page() -> Html<&'static str> {
    Html(HISTORY_PAGE)
}
