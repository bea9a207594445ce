//! OpenAI-backed journey generator.
//!
//! Asks a chat completion model for one milestone per week and parses
//! the JSON plan out of the reply. Models wrap the JSON in prose often
//! enough that parsing slices from the first `{` to the last `}` before
//! deserializing.
//!
//! Every failure mode maps to a [`GenerationError`]; the caller falls
//! back to a placeholder journey, so nothing here is fatal.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::domain::goal::{Complexity, MilestonePlan};
use crate::ports::{GenerationError, JourneyGenerator};

const SYSTEM_PROMPT: &str = "You are an expert learning path designer.";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

/// Configuration for the OpenAI journey generator.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gpt-3.5-turbo").
    pub model: String,
    /// Base URL for the API (default: https://api.openai.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl OpenAiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Journey generator calling the OpenAI chat completions API.
pub struct OpenAiJourneyGenerator {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiJourneyGenerator {
    /// Creates a new generator with the given configuration.
    pub fn new(config: OpenAiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl JourneyGenerator for OpenAiJourneyGenerator {
    async fn generate(
        &self,
        title: &str,
        complexity: Complexity,
        duration_weeks: u32,
    ) -> Result<Vec<MilestonePlan>, GenerationError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: build_prompt(title, complexity, duration_weeks),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Unavailable(format!(
                        "Request timed out after {}s",
                        self.config.timeout.as_secs()
                    ))
                } else {
                    GenerationError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Unavailable(format!(
                "OpenAI returned {}: {}",
                status, body
            )));
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(format!("Failed to parse response: {}", e)))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::Malformed("No choices in response".to_string()))?;

        parse_plan(&content)
    }
}

impl std::fmt::Debug for OpenAiJourneyGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiJourneyGenerator")
            .field("model", &self.config.model)
            .field("base_url", &self.config.base_url)
            .finish_non_exhaustive()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper functions
// ═══════════════════════════════════════════════════════════════════════════

/// Builds the user prompt asking for one milestone per week.
fn build_prompt(title: &str, complexity: Complexity, duration_weeks: u32) -> String {
    format!(
        "Create a {} level learning journey for: {}\n\
         Duration: {} weeks\n\
         Break it into weekly milestones with specific learning objectives.\n\
         Return ONLY valid JSON format with this structure:\n\
         {{\n\
           \"milestones\": [\n\
             {{\n\
               \"week\": 1,\n\
               \"objective\": \"specific learning objective\",\n\
               \"dependencies\": [],\n\
               \"resources\": [\"resource1\", \"resource2\"]\n\
             }}\n\
           ]\n\
         }}",
        complexity, title, duration_weeks
    )
}

/// Extracts and deserializes the milestone plan from model output.
fn parse_plan(content: &str) -> Result<Vec<MilestonePlan>, GenerationError> {
    let json = extract_json(content).ok_or_else(|| {
        GenerationError::Malformed("No JSON object found in model output".to_string())
    })?;

    let payload: PlanPayload = serde_json::from_str(json)
        .map_err(|e| GenerationError::Malformed(format!("Failed to parse plan JSON: {}", e)))?;

    Ok(payload.milestones)
}

/// Slices from the first `{` to the last `}`, tolerating prose around
/// the JSON body.
fn extract_json(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&content[start..=end])
}

// ----- OpenAI API Types -----

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct PlanPayload {
    milestones: Vec<MilestonePlan>,
}
