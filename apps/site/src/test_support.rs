//! Shared fixtures for handler and pipeline tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::profile::Profile;
use crate::models::snapshot::{AiTailoring, TailorRequest};
use crate::state::AppState;
use crate::tailoring::ai::TailorBackend;

/// Canned backend: answers with a fixed `AiTailoring`, or fails like an
/// unreachable upstream.
pub struct FakeTailor {
    answer: Option<AiTailoring>,
    calls: AtomicUsize,
}

impl FakeTailor {
    pub fn answering(answer: AiTailoring) -> Self {
        Self {
            answer: Some(answer),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            answer: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TailorBackend for FakeTailor {
    async fn tailor(
        &self,
        _profile: &Profile,
        _request: &TailorRequest,
    ) -> Result<AiTailoring, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer.clone().ok_or_else(|| AppError::Upstream {
            message: "Gemini request failed".to_string(),
            details: Some("upstream unavailable".to_string()),
        })
    }

    fn name(&self) -> &str {
        "fake"
    }
}

pub fn test_state(tailor: Option<FakeTailor>) -> AppState {
    AppState {
        profile: Arc::new(Profile::builtin().expect("builtin profile")),
        tailor: tailor.map(|t| Arc::new(t) as Arc<dyn TailorBackend>),
        config: Config::default(),
    }
}

/// Like `test_state`, but the caller keeps a handle to count backend calls.
pub fn test_state_shared(tailor: Arc<FakeTailor>) -> AppState {
    AppState {
        tailor: Some(tailor as Arc<dyn TailorBackend>),
        ..test_state(None)
    }
}
