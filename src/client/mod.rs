//! Generation client module - trait seam, Gemini client, shared handle

mod gemini;
mod traits;

pub use gemini::{compose_prompt, GeminiClient};
pub use traits::{ImageGenerator, StyleRequest};

use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::config::GeminiConfig;
use crate::error::Result;

/// Exactly-once lazily constructed generation client handle.
///
/// All concurrent per-style calls share one client. The first caller to
/// need it constructs it; a failed construction (missing credential) is
/// surfaced to every caller and nothing is cached.
pub struct SharedGenerator {
    config: GeminiConfig,
    cell: OnceCell<Arc<dyn ImageGenerator>>,
}

impl SharedGenerator {
    /// Handle that builds a `GeminiClient` from config on first use
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            cell: OnceCell::new(),
        }
    }

    /// Handle pre-seeded with an existing generator
    pub fn preset(generator: Arc<dyn ImageGenerator>) -> Self {
        Self {
            config: GeminiConfig::default(),
            cell: OnceCell::new_with(Some(generator)),
        }
    }

    /// Get the shared generator, constructing it on first use
    pub async fn get(&self) -> Result<Arc<dyn ImageGenerator>> {
        self.cell
            .get_or_try_init(|| async {
                let client = GeminiClient::new(&self.config)?;
                Ok(Arc::new(client) as Arc<dyn ImageGenerator>)
            })
            .await
            .map(Arc::clone)
    }
}
