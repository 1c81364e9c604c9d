//! Axum route handlers for the HTML pages.

use axum::{
    extract::{Query, State},
    http::header,
    response::{Html, IntoResponse},
};
use chrono::Datelike;

use crate::errors::AppError;
use crate::pages::{cv, home, studio, STYLESHEET};
use crate::state::AppState;
use crate::tailoring::studio::{run_studio, StudioForm};

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let year = chrono::Utc::now().year();
    let html = home::render(&state.profile, year).map_err(anyhow::Error::from)?;
    Ok(Html(html))
}

/// GET /cv
pub async fn handle_cv(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = cv::render(&state.profile).map_err(anyhow::Error::from)?;
    Ok(Html(html))
}

/// GET /apply
///
/// Renders the studio with the heuristic result for the submitted (or default)
/// requirements. When "use AI" is ticked the backend is consulted; a failure
/// shows inline and never turns into an error page.
pub async fn handle_studio_page(
    State(state): State<AppState>,
    Query(form): Query<StudioForm>,
) -> Result<Html<String>, AppError> {
    let request = form.tailor_request();
    let package = run_studio(
        &state.profile,
        state.tailor_backend(),
        &request,
        form.use_ai(),
    )
    .await;
    let html = studio::render(&state.profile, &form, &package).map_err(anyhow::Error::from)?;
    Ok(Html(html))
}

/// GET /assets/site.css
pub async fn handle_stylesheet() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "text/css; charset=utf-8"),
            (header::CACHE_CONTROL, "public, max-age=3600"),
        ],
        STYLESHEET,
    )
}
