pub mod auth;
pub mod chat;
pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::jobs::handlers::handle_match_jobs;
use crate::resume::handlers::handle_upload_resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/chat", post(chat::chat_handler))
        .route("/signup", post(auth::signup_handler))
        .route("/login", post(auth::login_handler))
        .route("/upload-resume", post(handle_upload_resume))
        .route("/match-jobs/:resume_id", get(handle_match_jobs))
        .with_state(state)
}
