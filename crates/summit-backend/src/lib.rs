//! HTTP backend for the Health & Safety Summit website.
//!
//! Serves the static session catalog, persists attendee registrations to a
//! document store and exposes a diagnostics snapshot. The store is chosen at
//! startup and injected into every handler through [`AppState`].

use std::sync::Arc;

use chrono::{DateTime, Utc};

pub mod catalog;
pub mod config;
pub mod handlers;
pub mod routes;
pub mod serialize;
pub mod services;

use crate::config::Settings;
use crate::services::DocumentStore;

/// State shared by all handlers.
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub settings: Settings,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, settings: Settings) -> Self {
        Self {
            store,
            settings,
            started_at: Utc::now(),
        }
    }
}
