//! State shared across requests

use crate::config::ServiceConfig;
use crate::lifecycle::ApiSystem;
use std::sync::Arc;

/// Server state shared across requests
#[derive(Clone)]
pub struct AppState {
    /// Stores, token issuer, and reset baseline
    pub system: Arc<ApiSystem>,

    /// Effective configuration, reported by `GET /config`
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(system: Arc<ApiSystem>, config: ServiceConfig) -> Self {
        Self { system, config }
    }
}
