// PDF rendering: font metrics, CV layout, printpdf painter.
// Painting is CPU-bound and must run inside tokio::task::spawn_blocking.

pub mod metrics;
pub mod pdf;

use thiserror::Error;

pub use pdf::{render_cv, CvPdfRequest, PDF_FILENAME};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF font error: {0}")]
    Font(String),

    #[error("PDF save error: {0}")]
    Save(String),
}
