//! Gemini `generateContent` client.
//!
//! Thin HTTP wrapper: one request per drawing, no retries. Parsing lives in
//! `parse_response` so it can be tested without the network.

use super::ImageDescriber;
use super::types::CommentaryError;
use crate::config::CommentaryConfig;
use crate::export::strip_data_url;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT_SECS: u64 = 10;
const IMAGE_MIME_TYPE: &str = "image/png";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiDescriber {
    http: reqwest::Client,
    url: Url,
    prompt: String,
    temperature: f64,
    top_p: f64,
}

impl GeminiDescriber {
    /// Builds a client from config, reading the API key from the configured
    /// environment variable.
    ///
    /// # Errors
    /// Returns an error if the key is missing, the URL is invalid, or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &CommentaryConfig) -> Result<Self, CommentaryError> {
        let api_key =
            std::env::var(&config.api_key_env).map_err(|_| CommentaryError::MissingApiKey {
                var: config.api_key_env.clone(),
            })?;
        Self::new(config, &api_key)
    }

    /// Builds a client with an explicit API key.
    pub fn new(config: &CommentaryConfig, api_key: &str) -> Result<Self, CommentaryError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| CommentaryError::HttpClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            url: request_url(&config.endpoint, &config.model, api_key)?,
            prompt: config.prompt.clone(),
            temperature: config.temperature,
            top_p: config.top_p,
        })
    }
}

#[async_trait]
impl ImageDescriber for GeminiDescriber {
    async fn describe(&self, encoded_image: &str) -> Result<String, CommentaryError> {
        let body = build_request(
            strip_data_url(encoded_image),
            &self.prompt,
            self.temperature,
            self.top_p,
        );

        let response = self
            .http
            .post(self.url.clone())
            .json(&body)
            .send()
            .await
            .map_err(|e| CommentaryError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| CommentaryError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(CommentaryError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

/// `{endpoint}/models/{model}:generateContent?key={api_key}`
fn request_url(endpoint: &str, model: &str, api_key: &str) -> Result<Url, CommentaryError> {
    let base = format!("{}/", endpoint.trim_end_matches('/'));
    let mut url = Url::parse(&base)?.join(&format!("models/{model}:generateContent"))?;
    url.query_pairs_mut().append_pair("key", api_key);
    Ok(url)
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct ApiRequest<'a> {
    contents: [Content<'a>; 1],
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 2],
}

#[derive(Serialize)]
#[serde(untagged)]
enum Part<'a> {
    Image { inline_data: InlineData<'a> },
    Text { text: &'a str },
}

#[derive(Serialize)]
struct InlineData<'a> {
    mime_type: &'a str,
    data: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
}

#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

fn build_request<'a>(
    image_base64: &'a str,
    prompt: &'a str,
    temperature: f64,
    top_p: f64,
) -> ApiRequest<'a> {
    ApiRequest {
        contents: [Content {
            parts: [
                Part::Image {
                    inline_data: InlineData {
                        mime_type: IMAGE_MIME_TYPE,
                        data: image_base64,
                    },
                },
                Part::Text { text: prompt },
            ],
        }],
        generation_config: GenerationConfig { temperature, top_p },
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Joins the text parts of the first candidate.
fn parse_response(json: &str) -> Result<String, CommentaryError> {
    let api: ApiResponse =
        serde_json::from_str(json).map_err(|e| CommentaryError::ApiParse(e.to_string()))?;

    let text: String = api
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    let text = text.trim();
    if text.is_empty() {
        return Err(CommentaryError::EmptyResponse);
    }
    Ok(text.to_string())
}
