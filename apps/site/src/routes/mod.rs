pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::pages::handlers as pages;
use crate::state::AppState;
use crate::tailoring::handlers as tailoring;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/cv", get(pages::handle_cv))
        .route("/apply", get(pages::handle_studio_page))
        .route("/apply/pdf", post(tailoring::handle_studio_pdf))
        .route("/assets/site.css", get(pages::handle_stylesheet))
        // Tailoring API
        .route("/api/tailor", post(tailoring::handle_tailor))
        .route("/api/studio", post(tailoring::handle_studio))
        .route("/api/cv-pdf", post(tailoring::handle_cv_pdf))
        .fallback(not_found)
        .with_state(state)
}
