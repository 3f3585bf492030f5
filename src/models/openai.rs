//! OpenAI completion API data models
//!
//! Defines the request and response structures of the legacy
//! `/completions` endpoint

use serde::{Deserialize, Serialize};

/// Completion API request structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model name
    pub model: String,
    /// Prompt text
    pub prompt: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Nucleus sampling threshold
    pub top_p: f32,
    /// Frequency penalty
    pub frequency_penalty: f32,
    /// Presence penalty
    pub presence_penalty: f32,
}

impl CompletionRequest {
    /// Build a caption completion request with the service's fixed
    /// sampling parameters; nothing here is caller-controlled
    pub fn caption(model: &str, prompt: String) -> Self {
        Self {
            model: model.to_string(),
            prompt,
            temperature: 0.7,
            max_tokens: 96,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

/// Completion API response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Response ID
    #[serde(default)]
    pub id: Option<String>,
    /// Object type
    #[serde(default)]
    pub object: Option<String>,
    /// Creation timestamp
    #[serde(default)]
    pub created: Option<u64>,
    /// Model used
    #[serde(default)]
    pub model: Option<String>,
    /// Candidate completions; only the first is used
    pub choices: Vec<CompletionChoice>,
    /// Token usage (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<CompletionUsage>,
}

/// A single candidate completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionChoice {
    /// Generated text
    pub text: String,
    /// Choice index
    #[serde(default)]
    pub index: u32,
    /// Finish reason (optional)
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token usage information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionUsage {
    /// Tokens in the prompt
    pub prompt_tokens: u32,
    /// Tokens in the completion
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}
