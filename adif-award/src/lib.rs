//! adif-award library - ADIF award tier service
//!
//! Accepts an uploaded ADIF log, counts the unique callsigns worked and
//! reports the award tier that count earns.

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod award;
pub mod extract;
pub mod service;
pub mod source;

pub use award::{classify, AwardTier};
pub use extract::{extract, Extraction};
pub use service::{AdifService, AwardSummary};
pub use source::{AdifRecordSource, RecordSource};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub service: AdifService,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Create new application state
    pub fn new(service: AdifService, max_upload_bytes: usize) -> Self {
        Self {
            service,
            max_upload_bytes,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::post;

    let upload = Router::new()
        .route("/upload_adif/", post(api::upload_adif))
        .route("/upload_adif", post(api::upload_adif))
        .layer(DefaultBodyLimit::max(state.max_upload_bytes));

    Router::new()
        .merge(upload)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
