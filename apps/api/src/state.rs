use std::sync::Arc;

use crate::auth::{IdentityProvider, UserDirectory};
use crate::documents::store::DocumentStore;
use crate::export::{DocumentRenderer, ExportOptions};
use crate::improve::TextImprover;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every external collaborator sits behind a trait object so tests can swap in
/// in-memory versions.
#[derive(Clone)]
pub struct AppState {
    pub identity: Arc<dyn IdentityProvider>,
    pub users: Arc<dyn UserDirectory>,
    pub documents: Arc<dyn DocumentStore>,
    pub improver: Arc<dyn TextImprover>,
    pub renderer: Arc<dyn DocumentRenderer>,
    /// A4 portrait, 15 mm margins; timeout from `RENDER_TIMEOUT_SECS`.
    pub export_options: ExportOptions,
}
