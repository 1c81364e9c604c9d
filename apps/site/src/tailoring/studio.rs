//! Application Studio pipeline: keywords → heuristic snapshot → AI merge →
//! letters → mailto.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::snapshot::{AiTailoring, ApplicationPackage, TailorRequest};
use crate::render::CvPdfRequest;
use crate::tailoring::ai::TailorBackend;
use crate::tailoring::email::build_mailto;
use crate::tailoring::keywords::extract_keywords;
use crate::tailoring::letters::{cold_email, cover_letter, offer_letter};
use crate::tailoring::merge::merge_snapshot;
use crate::tailoring::selector::heuristic_snapshot;

/// Pre-fills the studio form on first visit.
pub const DEFAULT_REQUIREMENTS: &str = "We need a full-stack engineer comfortable with Next.js, \
    cloud infrastructure, CI/CD, and blockchain/Web3 fundamentals. You will collaborate with \
    product to ship secure, scalable features.";

/// Body of `POST /api/studio`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudioRequest {
    pub role: String,
    pub company: String,
    pub requirements: String,
    pub use_ai: bool,
}

impl StudioRequest {
    pub fn tailor_request(&self) -> TailorRequest {
        TailorRequest {
            role: self.role.clone(),
            company: self.company.clone(),
            requirements: self.requirements.clone(),
        }
    }
}

/// The studio's HTML form, sent as the query string of `GET /apply`. Checkboxes arrive as `on` or not at all, and a missing
/// `requirements` field means the visitor has not submitted yet.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudioForm {
    pub role: String,
    pub company: String,
    pub requirements: Option<String>,
    pub use_ai: Option<String>,
}

impl StudioForm {
    pub fn submitted(&self) -> bool {
        self.requirements.is_some()
    }

    pub fn use_ai(&self) -> bool {
        self.use_ai
            .as_deref()
            .is_some_and(|v| matches!(v, "on" | "true" | "1" | "yes"))
    }

    pub fn tailor_request(&self) -> TailorRequest {
        TailorRequest {
            role: self.role.clone(),
            company: self.company.clone(),
            requirements: self
                .requirements
                .clone()
                .unwrap_or_else(|| DEFAULT_REQUIREMENTS.to_string()),
        }
    }
}

/// Body of `POST /apply/pdf`: the snapshot shown on the studio page, as the
/// JSON of a `CvPdfRequest`. Exporting it never calls the AI backend again.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StudioPdfForm {
    pub cv: String,
}

impl StudioPdfForm {
    /// Serializes what the page displays so the download matches it exactly.
    pub fn encode(package: &ApplicationPackage, request: &TailorRequest) -> serde_json::Result<String> {
        serde_json::to_string(&CvPdfRequest::from_snapshot(
            &package.snapshot,
            &request.role,
            &request.company,
        ))
    }

    pub fn pdf_request(&self) -> serde_json::Result<CvPdfRequest> {
        serde_json::from_str(&self.cv)
    }
}

/// Assembles the package from the heuristic pass and an optional AI answer.
///
/// The cover letter is the AI's when it sent one. The cold email falls back to
/// the heuristic letter and the offer note to the merged snapshot.
pub fn build_package(
    profile: &Profile,
    request: &TailorRequest,
    ai: Option<&AiTailoring>,
    ai_error: Option<String>,
) -> ApplicationPackage {
    let keywords = extract_keywords(&request.requirements);
    let heuristic = heuristic_snapshot(profile, request, &keywords);
    let heuristic_letter = cover_letter(profile, request, &keywords, &heuristic);

    let snapshot = merge_snapshot(profile, heuristic, ai);

    let cold_email = ai
        .and_then(|a| a.cold_email.clone())
        .unwrap_or_else(|| cold_email(&heuristic_letter));
    let cover_letter = ai
        .and_then(|a| a.cover_letter.clone())
        .unwrap_or(heuristic_letter);
    let offer_letter = ai
        .and_then(|a| a.offer_letter.clone())
        .unwrap_or_else(|| offer_letter(profile, request, &snapshot));
    let mailto = build_mailto(request, &cover_letter, &snapshot);

    ApplicationPackage {
        keywords,
        snapshot,
        cover_letter,
        cold_email,
        offer_letter,
        mailto,
        ai_applied: ai.is_some(),
        ai_error,
    }
}

/// Runs the full studio flow. AI failures never fail the request: they are
/// reported in `ai_error` next to the heuristic result.
pub async fn run_studio(
    profile: &Profile,
    backend: Option<&dyn TailorBackend>,
    request: &TailorRequest,
    use_ai: bool,
) -> ApplicationPackage {
    if !use_ai {
        return build_package(profile, request, None, None);
    }

    let outcome = match backend {
        Some(backend) => backend.tailor(profile, request).await,
        None => Err(AppError::MissingCredential),
    };

    match outcome {
        Ok(ai) => {
            info!("AI tailoring applied");
            build_package(profile, request, Some(&ai), None)
        }
        Err(err) => {
            warn!("AI tailoring failed, keeping heuristic result: {err}");
            build_package(profile, request, None, Some(describe(&err)))
        }
    }
}

fn describe(err: &AppError) -> String {
    match err {
        AppError::Upstream {
            message,
            details: Some(details),
        } => format!("{message}: {details}"),
        AppError::Upstream { message, .. } => message.clone(),
        other => other.to_string(),
    }
}
