//! Caption API data models
//!
//! Defines the request and response structures of the `/api/generate`
//! endpoint

use serde::{Deserialize, Serialize};

/// Sentinel `target` value meaning "any platform"
pub const ANY_TARGET: &str = "Apa Aja";

/// Caption generation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionRequest {
    /// User-supplied base text for the caption
    pub caption: String,
    /// Destination platform label, e.g. "TikTok" or "Instagram";
    /// "Apa Aja" means any platform
    #[serde(default = "default_target")]
    pub target: String,
    /// Apply Gen-Z slang style
    #[serde(default)]
    pub genz: bool,
    /// Apply melancholic-mood style
    #[serde(default)]
    pub galau: bool,
}

fn default_target() -> String {
    ANY_TARGET.to_string()
}

/// Caption generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionResponse {
    /// Generated caption text
    pub result: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserialization() {
        let json = r#"{"caption":"lagi nyoba","target":"TikTok","genz":true,"galau":false}"#;
        let request: CaptionRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.caption, "lagi nyoba");
        assert_eq!(request.target, "TikTok");
        assert!(request.genz);
        assert!(!request.galau);
    }

    #[test]
    fn test_request_defaults() {
        let json = r#"{"caption":"lagi nyoba"}"#;
        let request: CaptionRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.target, ANY_TARGET);
        assert!(!request.genz);
        assert!(!request.galau);
    }

    #[test]
    fn test_response_serialization() {
        let response = CaptionResponse {
            result: "Sebuah caption".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({"result": "Sebuah caption"}));
    }
}
