use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::providers::eventbrite::EventsProvider;
use crate::providers::generative::TextCompletion;
use crate::providers::identity::FirebaseAuthClient;
use crate::providers::jsearch::JobSearchProvider;

/// Shared application state injected into all route handlers via Axum
/// extractors. Provider handles are constructed once at startup and are
/// read-only afterwards; there is no other cross-request state.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub jobs: Arc<dyn JobSearchProvider>,
    pub events: Arc<dyn EventsProvider>,
    /// Remote leg of the generation fallback chain.
    pub remote_llm: Arc<dyn TextCompletion>,
    /// Local leg, absent unless a local runtime is wired in at startup.
    pub local_llm: Option<Arc<dyn TextCompletion>>,
    pub identity: FirebaseAuthClient,
    pub config: Config,
}
