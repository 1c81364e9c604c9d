//! Axum route handlers for the tailoring API and the studio's PDF export.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::header,
    response::{IntoResponse, Response},
    Form, Json,
};
use bytes::Bytes;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::snapshot::{AiTailoring, ApplicationPackage, TailorRequest};
use crate::render::{render_cv, CvPdfRequest, PDF_FILENAME};
use crate::state::AppState;
use crate::tailoring::studio::{run_studio, StudioPdfForm, StudioRequest};

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/tailor
///
/// Proxies one tailoring request to the AI backend and returns its answer as-is.
pub async fn handle_tailor(
    State(state): State<AppState>,
    payload: Result<Json<TailorRequest>, JsonRejection>,
) -> Result<Json<AiTailoring>, AppError> {
    let Json(request) = payload?;
    let backend = state.tailor_backend().ok_or(AppError::MissingCredential)?;

    let answer = backend.tailor(&state.profile, &request).await?;
    info!("Tailoring answered by {}", backend.name());

    Ok(Json(answer))
}

/// POST /api/studio
///
/// Full studio pipeline as JSON. AI failures are reported in `ai_error`.
pub async fn handle_studio(
    State(state): State<AppState>,
    payload: Result<Json<StudioRequest>, JsonRejection>,
) -> Result<Json<ApplicationPackage>, AppError> {
    let Json(body) = payload?;
    let package = run_studio(
        &state.profile,
        state.tailor_backend(),
        &body.tailor_request(),
        body.use_ai,
    )
    .await;
    Ok(Json(package))
}

/// POST /api/cv-pdf
pub async fn handle_cv_pdf(
    State(state): State<AppState>,
    payload: Result<Json<CvPdfRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload?;
    let bytes = render_pdf(state.profile.clone(), request).await?;
    Ok(pdf_response(bytes))
}

/// POST /apply/pdf
///
/// Form-encoded twin of `/api/cv-pdf` for the studio page. Renders the snapshot
/// the page already shows; the AI backend is not called again.
pub async fn handle_studio_pdf(
    State(state): State<AppState>,
    payload: Result<Form<StudioPdfForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Form(form) = payload.map_err(|r| AppError::Validation(r.body_text()))?;
    let request = form
        .pdf_request()
        .map_err(|e| AppError::Validation(format!("Invalid CV snapshot: {e}")))?;
    let bytes = render_pdf(state.profile.clone(), request).await?;
    Ok(pdf_response(bytes))
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

async fn render_pdf(profile: Arc<Profile>, request: CvPdfRequest) -> Result<Vec<u8>, AppError> {
    let bytes = tokio::task::spawn_blocking(move || render_cv(&profile, &request))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF task failed: {e}")))??;
    info!("Rendered CV PDF ({} bytes)", bytes.len());
    Ok(bytes)
}

fn pdf_response(bytes: Vec<u8>) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        Bytes::from(bytes),
    )
        .into_response()
}
