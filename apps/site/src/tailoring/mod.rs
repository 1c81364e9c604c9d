// Tailoring pipeline: keyword extraction, heuristic selection, AI merge,
// letters and the mailto link.
// All model calls go through llm_client via the TailorBackend trait.

pub mod ai;
pub mod email;
pub mod handlers;
pub mod keywords;
pub mod letters;
pub mod merge;
pub mod prompts;
pub mod selector;
pub mod studio;
