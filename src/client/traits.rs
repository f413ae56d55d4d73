//! Common trait and request types for generation backends

use async_trait::async_trait;

use crate::encoding::ReferenceImage;
use crate::error::Result;

/// One style's worth of generation input
#[derive(Debug, Clone)]
pub struct StyleRequest {
    /// The raw user prompt
    pub prompt: String,

    /// The selected style's instruction block
    pub style_instruction: String,

    /// Optional reference image; when present the call becomes an edit
    pub reference: Option<ReferenceImage>,
}

/// Trait for styled image generation backends
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Perform exactly one styled generation call.
    ///
    /// On success the returned string is a displayable image reference:
    /// either a self-contained data URL or a remote URL.
    async fn generate_styled(&self, request: StyleRequest) -> Result<String>;
}
