use std::collections::VecDeque;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ServiceConfig;

/// Fatal failure modes of the structured extraction service, classified once
/// at the HTTP boundary. All of them surface to callers as a retry-later
/// condition; none is recoverable within a pipeline run.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("transport error: {0}")]
    Http(String),

    #[error("undecodable service reply: {0}")]
    Decode(String),
}

/// One request to the extraction service: fixed instructions plus the
/// document-derived content, with sampling and output-size limits.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Extraction service abstraction (allows mocking).
pub trait ExtractionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;
}

/// Shared clients are clients too — tests hold an `Arc` to a mock while the
/// pipeline owns another handle.
impl<T: ExtractionClient + ?Sized> ExtractionClient for std::sync::Arc<T> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        (**self).complete(request)
    }
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
pub struct ChatCompletionsClient {
    config: ServiceConfig,
    client: reqwest::blocking::Client,
}

impl ChatCompletionsClient {
    pub fn new(config: ServiceConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            config: ServiceConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
            client,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Request body for POST /chat/completions
#[derive(Serialize)]
struct ChatCompletionsBody<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

/// Response body from POST /chat/completions
#[derive(Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

impl ExtractionClient for ChatCompletionsClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        let url = format!("{}/chat/completions", self.config.base_url);
        let body = ChatCompletionsBody {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ServiceError::Http(format!(
                        "request timed out after {}s",
                        self.config.timeout_secs
                    ))
                } else {
                    ServiceError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => {
                    tracing::error!(status = status.as_u16(), "service credentials rejected");
                    ServiceError::Auth(body)
                }
                429 => {
                    tracing::warn!("service rate limit hit");
                    ServiceError::RateLimit(body)
                }
                code => {
                    tracing::error!(status = code, "service returned an error status");
                    ServiceError::Status { status: code, body }
                }
            });
        }

        let parsed: ChatCompletionsResponse = response
            .json()
            .map_err(|e| ServiceError::Decode(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| ServiceError::Decode("reply contained no choices".into()))
    }
}

/// Mock extraction client for testing — plays back a scripted sequence of
/// results and records every request it receives.
pub struct MockExtractionClient {
    responses: Mutex<VecDeque<Result<String, ServiceError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl MockExtractionClient {
    /// Script a sequence of successful replies, consumed one per call.
    pub fn new(responses: &[&str]) -> Self {
        Self {
            responses: Mutex::new(responses.iter().map(|r| Ok(r.to_string())).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Script an arbitrary sequence of results, failures included.
    pub fn with_results(results: Vec<Result<String, ServiceError>>) -> Self {
        Self {
            responses: Mutex::new(results.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, in call order.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl ExtractionClient for MockExtractionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Http("mock response script exhausted".into())))
    }
}
