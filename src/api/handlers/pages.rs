use axum::response::Html;

/// The upload form. Its `accept` attribute is the extension filter at the
/// presentation layer; intake re-validates server-side anyway.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
