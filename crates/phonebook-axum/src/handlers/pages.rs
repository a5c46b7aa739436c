//! Non-API pages: landing page, `/info` summary and the unknown-endpoint fallback.

use axum::extract::State;
use axum::response::Html;
use chrono::Local;

use crate::error::HttpError;
use crate::state::AppState;
use phonebook_core::DirectorySummary;

/// Landing page served when no static assets are configured.
pub async fn root() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

/// Person count and current server time.
pub async fn info(State(state): State<AppState>) -> Result<Html<String>, HttpError> {
    let summary = state.directory.summary().await?;
    Ok(Html(render_info(&summary)))
}

/// Fallback for paths no route matches.
pub async fn unknown_endpoint() -> HttpError {
    HttpError::NotFound("unknown endpoint".to_string())
}

/// Render the `/info` page body in server-local time.
pub fn render_info(summary: &DirectorySummary) -> String {
    let timestamp = summary
        .generated_at
        .with_timezone(&Local)
        .format("%a %b %d %Y %H:%M:%S GMT%z");
    format!(
        "<p>Phonebook has info for {} people</p>\n<p>{}</p>",
        summary.count, timestamp
    )
}
