//! Caption generation handler
//!
//! Validates configuration, builds the prompt, calls the completion
//! provider and maps outcomes to the caption API contract

use crate::handlers::AppState;
use crate::models::caption::{CaptionRequest, CaptionResponse};
use crate::models::openai::CompletionRequest;
use crate::services::prompt::{build_prompt, normalize_caption};
use crate::utils::error::{AppError, AppResult};
use crate::utils::logging::create_caption_log_summary;
use axum::{extract::State, Json};
use std::sync::Arc;
use tracing::debug;

/// Handle caption generation requests
///
/// POST /api/generate
pub async fn handle_generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CaptionRequest>,
) -> AppResult<Json<CaptionResponse>> {
    if let Ok(summary) = serde_json::to_string(&create_caption_log_summary(&request)) {
        debug!("Received caption request: {}", summary);
    }

    // The credential check comes first; without a key the provider is
    // never contacted
    let api_key = state
        .settings
        .openai
        .api_key
        .as_deref()
        .ok_or(AppError::MissingApiKey)?;

    validate_caption_request(&request)?;

    let normalized = CaptionRequest {
        caption: normalize_caption(&request.caption),
        ..request
    };
    let prompt = build_prompt(&normalized);
    debug!("Built completion prompt ({} chars)", prompt.len());

    let completion_request = CompletionRequest::caption(&state.settings.openai.model, prompt);
    let completion = state.client.complete(api_key, completion_request).await?;

    // Only the first candidate is used
    let result = completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.text)
        .ok_or_else(|| AppError::Upstream("Provider returned no completion choices".to_string()))?;

    debug!("Caption generated ({} chars)", result.len());
    Ok(Json(CaptionResponse { result }))
}

/// Validate a caption request
fn validate_caption_request(request: &CaptionRequest) -> AppResult<()> {
    if request.caption.trim().is_empty() {
        return Err(AppError::Validation("caption cannot be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(caption: &str) -> CaptionRequest {
        CaptionRequest {
            caption: caption.to_string(),
            target: "TikTok".to_string(),
            genz: false,
            galau: false,
        }
    }

    #[test]
    fn test_validate_caption_request() {
        assert!(validate_caption_request(&request("lagi nyoba")).is_ok());
        assert!(validate_caption_request(&request("")).is_err());
        assert!(validate_caption_request(&request("   ")).is_err());
    }
}
