//! Pluggable AI tailoring backend that produces `AiTailoring` answers.
//!
//! Default: `GeminiTailor` (one `generateContent` call per request).
//! `AppState` holds an `Option<Arc<dyn TailorBackend>>`; `None` means no API key
//! was configured and every AI request answers with the missing-credential error.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::models::profile::Profile;
use crate::models::snapshot::{AiTailoring, TailorRequest};
use crate::tailoring::prompts::build_tailor_prompt;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Implement this to swap the AI provider without touching handlers.
#[async_trait]
pub trait TailorBackend: Send + Sync {
    async fn tailor(&self, profile: &Profile, request: &TailorRequest)
        -> Result<AiTailoring, AppError>;

    /// Short label used in logs.
    fn name(&self) -> &str;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiTailor
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiTailor {
    llm: LlmClient,
}

impl GeminiTailor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TailorBackend for GeminiTailor {
    async fn tailor(
        &self,
        profile: &Profile,
        request: &TailorRequest,
    ) -> Result<AiTailoring, AppError> {
        let prompt = build_tailor_prompt(profile, request);
        info!(
            "Requesting AI tailoring (model: {}, role: {:?}, company: {:?})",
            self.llm.model(),
            request.role,
            request.company
        );
        let answer: AiTailoring = self.llm.call_json(&prompt).await?;
        Ok(answer)
    }

    fn name(&self) -> &str {
        self.llm.model()
    }
}
