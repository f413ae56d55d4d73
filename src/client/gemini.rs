//! Gemini generateContent client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::client::traits::{ImageGenerator, StyleRequest};
use crate::config::GeminiConfig;
use crate::encoding;
use crate::error::{AppError, Result};

/// Client for the Gemini image generation API
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum RequestPart {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Text {
        text: String,
    },
}

#[derive(Debug, Serialize, Deserialize)]
struct InlineData {
    #[serde(rename = "mimeType")]
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseModalities")]
    response_modalities: Vec<&'static str>,
    #[serde(rename = "candidateCount")]
    candidate_count: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResponsePart {
    Inline {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Other(serde_json::Value),
}

impl GeminiClient {
    /// Create a new client from configuration.
    ///
    /// Fails with a configuration error when no API key is set. This is
    /// fatal for every generation attempt until the process is restarted
    /// with a valid key.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or(AppError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    fn extract_image(&self, response: GenerateContentResponse) -> Result<String> {
        if response.candidates.is_empty() {
            return Err(AppError::NoCandidates);
        }

        for candidate in &response.candidates {
            for part in &candidate.content.parts {
                if let ResponsePart::Inline { inline_data } = part {
                    debug!(mime_type = %inline_data.mime_type, "Extracted inline image data");
                    return Ok(encoding::data_url(&inline_data.mime_type, &inline_data.data));
                }
            }
        }

        // The model declined or returned text only
        warn!(model = %self.model, "Response contained candidates but no image data");
        Err(AppError::NoImageData)
    }
}

#[async_trait]
impl ImageGenerator for GeminiClient {
    async fn generate_styled(&self, request: StyleRequest) -> Result<String> {
        let full_prompt = compose_prompt(
            &request.prompt,
            &request.style_instruction,
            request.reference.is_some(),
        );

        // The encoded reference image, when present, is the first part
        let mut parts = Vec::with_capacity(2);
        if let Some(image) = &request.reference {
            parts.push(RequestPart::Inline {
                inline_data: InlineData {
                    mime_type: image.mime_type.clone(),
                    data: image.to_base64(),
                },
            });
        }
        parts.push(RequestPart::Text { text: full_prompt });

        let body = GenerateContentRequest {
            contents: vec![RequestContent { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT", "IMAGE"],
                candidate_count: 1,
            },
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        debug!(model = %self.model, "Sending generateContent request");

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(AppError::Api(format!(
                "status={} body={}",
                status, error_body
            )));
        }

        let parsed: GenerateContentResponse = response.json().await?;
        self.extract_image(parsed)
    }
}

/// Compose the single combined instruction text sent to the model
pub fn compose_prompt(prompt: &str, style_instruction: &str, editing: bool) -> String {
    let task = if editing {
        "Edit the provided image"
    } else {
        "Generate an image"
    };

    format!(
        "Task: {task} based on the User Prompt and the Style Guide below.\n\
         \n\
         User Prompt: {prompt}\n\
         \n\
         {style_instruction}\n\
         \n\
         Requirements:\n\
         - Strictly adhere to the visual language, color palette, and mood described in the Style Guide.\n\
         - High quality, professional design output.\n\
         - If editing: Maintain the subject matter but completely transform the style."
    )
}
