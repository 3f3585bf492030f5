//! Logging utilities
//!
//! Helpers for logging request summaries without flooding logs with
//! user-supplied text

use crate::models::caption::CaptionRequest;

/// Truncate a string with a note about original length
fn truncate_content(s: &str, max_len: usize) -> String {
    if s.len() > max_len {
        let mut end = max_len;
        // Back off to a char boundary so truncation never splits a
        // multi-byte character
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... ({} chars truncated)", &s[..end], s.len() - end)
    } else {
        s.to_string()
    }
}

/// Create a filtered summary of a caption request for logging
pub fn create_caption_log_summary(request: &CaptionRequest) -> serde_json::Value {
    serde_json::json!({
        "caption": truncate_content(&request.caption, 120),
        "target": request.target,
        "genz": request.genz,
        "galau": request.galau,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_content() {
        assert_eq!(truncate_content("pendek", 120), "pendek");
    }

    #[test]
    fn test_truncate_long_content() {
        let long = "a".repeat(200);
        let truncated = truncate_content(&long, 120);

        assert!(truncated.starts_with(&"a".repeat(120)));
        assert!(truncated.contains("80 chars truncated"));
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // Multi-byte characters must not be split mid-sequence
        let text = "héllo wörld".repeat(20);
        let truncated = truncate_content(&text, 121);
        assert!(truncated.contains("truncated"));
    }

    #[test]
    fn test_log_summary_fields() {
        let request = CaptionRequest {
            caption: "lagi nyoba".to_string(),
            target: "TikTok".to_string(),
            genz: true,
            galau: false,
        };

        let summary = create_caption_log_summary(&request);
        assert_eq!(summary["caption"], "lagi nyoba");
        assert_eq!(summary["target"], "TikTok");
        assert_eq!(summary["genz"], true);
        assert_eq!(summary["galau"], false);
    }
}
