//! Generation orchestrator - concurrent per-style fan-out and aggregation
//!
//! Given a set of selected style ids, the orchestrator fires one client
//! call per style, waits for every call to settle, and aggregates the
//! outcomes. A failing style never aborts its siblings; only an all-failed
//! batch escalates to the caller as an error.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::{Catalog, StyleProfile};
use crate::client::{SharedGenerator, StyleRequest};
use crate::config::OrchestratorConfig;
use crate::encoding::ReferenceImage;
use crate::error::{AppError, Result};

/// A successfully generated poster image
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub id: Uuid,
    pub style_id: String,
    /// Data URL or remote URL, directly usable as an image source
    pub image_url: String,
    /// Echo of the user prompt
    pub prompt: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

/// An absorbed per-style failure, kept for diagnostics and tests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFailure {
    pub style_id: String,
    pub error: String,
}

/// Aggregated outcome of one batch
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchOutcome {
    pub batch_id: Uuid,
    /// Successful results, in input iteration order of the style ids
    pub results: Vec<GenerationResult>,
    pub failures: Vec<StyleFailure>,
}

impl BatchOutcome {
    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}

/// Fan-out orchestrator over a shared generation client
pub struct Orchestrator {
    catalog: Arc<Catalog>,
    generator: SharedGenerator,
    config: OrchestratorConfig,
    in_flight: Semaphore,
}

impl Orchestrator {
    pub fn new(
        catalog: Arc<Catalog>,
        generator: SharedGenerator,
        config: OrchestratorConfig,
    ) -> Self {
        Self {
            catalog,
            generator,
            config,
            // Overlapping batches would race on downstream result state, so
            // only one may be outstanding at a time.
            in_flight: Semaphore::new(1),
        }
    }

    /// Run one generation call per selected style, concurrently, and
    /// aggregate the outcomes.
    ///
    /// Callers pre-validate that `prompt` and `style_ids` are non-empty.
    /// Unknown style ids are skipped silently. Fails with
    /// [`AppError::BatchInProgress`] if a previous batch has not settled,
    /// and with [`AppError::AllStylesFailed`] when at least one call was
    /// attempted and none succeeded.
    pub async fn generate_all(
        &self,
        style_ids: &[String],
        prompt: &str,
        reference: Option<ReferenceImage>,
    ) -> Result<BatchOutcome> {
        let _permit = self
            .in_flight
            .try_acquire()
            .map_err(|_| AppError::BatchInProgress)?;

        let batch_id = Uuid::new_v4();

        let styles: Vec<&StyleProfile> = style_ids
            .iter()
            .filter_map(|id| {
                let style = self.catalog.get(id);
                if style.is_none() {
                    warn!(batch = %batch_id, style = %id, "Unknown style id, skipping");
                }
                style
            })
            .collect();

        if styles.is_empty() {
            debug!(batch = %batch_id, "No known styles selected, nothing to generate");
            return Ok(BatchOutcome {
                batch_id,
                results: Vec::new(),
                failures: Vec::new(),
            });
        }

        let generator = self.generator.get().await?;
        let per_style_timeout = Duration::from_millis(self.config.per_style_timeout_ms);
        let limit = if self.config.max_concurrent == 0 {
            styles.len()
        } else {
            self.config.max_concurrent
        };

        info!(
            batch = %batch_id,
            styles = styles.len(),
            limit = limit,
            "Starting generation batch"
        );

        // `buffered` keeps up to `limit` calls in flight and yields settled
        // outcomes in input order, not completion order.
        let calls: Vec<_> = styles.into_iter().map(|style| {
            let generator = Arc::clone(&generator);
            let style_id = style.id.clone();
            let request = StyleRequest {
                prompt: prompt.to_string(),
                style_instruction: style.prompt_instruction.clone(),
                reference: reference.clone(),
            };
            async move {
                let outcome =
                    match tokio::time::timeout(per_style_timeout, generator.generate_styled(request))
                        .await
                    {
                        Ok(result) => result,
                        Err(_) => Err(AppError::Timeout(format!(
                            "Generation for style '{}' timed out",
                            style_id
                        ))),
                    };
                (style_id, outcome)
            }
        }).collect();

        let settled: Vec<(String, Result<String>)> =
            stream::iter(calls).buffered(limit).collect().await;

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for (style_id, outcome) in settled {
            match outcome {
                Ok(image_url) => results.push(GenerationResult {
                    id: Uuid::new_v4(),
                    style_id,
                    image_url,
                    prompt: prompt.to_string(),
                    timestamp: Utc::now(),
                }),
                Err(e) => {
                    warn!(batch = %batch_id, style = %style_id, error = %e, "Style generation failed");
                    failures.push(StyleFailure {
                        style_id,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            batch = %batch_id,
            succeeded = results.len(),
            failed = failures.len(),
            "Generation batch settled"
        );

        if results.is_empty() {
            return Err(AppError::AllStylesFailed);
        }

        Ok(BatchOutcome {
            batch_id,
            results,
            failures,
        })
    }
}
