// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::ConnectionSummary;
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    /// Password-free view of the database settings for the debug endpoint.
    pub database: Arc<ConnectionSummary>,
    pub production: bool,
}
