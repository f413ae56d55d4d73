//! Multi-Style Poster Generation Service
//!
//! A Rust service that fans out one Gemini image-generation call per
//! selected poster style, tolerates individual failures, and aggregates
//! the successful results into one batch outcome.

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod encoding;
pub mod error;
pub mod orchestrator;

pub use error::{AppError, Result};

use std::sync::Arc;

use catalog::Catalog;
use client::SharedGenerator;
use orchestrator::Orchestrator;

/// Application state shared across all handlers
pub struct AppState {
    pub settings: Arc<config::Settings>,
    pub catalog: Arc<Catalog>,
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// Wire the catalog, shared client handle, and orchestrator together
    pub fn from_settings(settings: config::Settings) -> Self {
        let catalog = Arc::new(Catalog::builtin());
        let generator = SharedGenerator::new(settings.gemini.clone());
        let orchestrator = Arc::new(Orchestrator::new(
            catalog.clone(),
            generator,
            settings.orchestrator.clone(),
        ));

        Self {
            settings: Arc::new(settings),
            catalog,
            orchestrator,
        }
    }
}
