//! Prompt construction service
//!
//! Deterministically turns a caption request into the Indonesian-language
//! instruction string sent to the completion provider

use crate::models::caption::{CaptionRequest, ANY_TARGET};

/// Platform label used when the request targets "any" platform
const ANY_TARGET_LABEL: &str = "Media Sosial";

/// Clause appended when Gen-Z style is requested
const GENZ_CLAUSE: &str = " dengan gaya bahasa Generasi Z";

/// Clause appended when melancholic mood is requested
const GALAU_CLAUSE: &str = " dalam kondisi hati yang galau";

/// Build the completion prompt for a caption request
///
/// Pure function: the same request always yields the same prompt. Clause
/// order is fixed (platform, style clauses, source caption) and the style
/// clauses appear only when their flag is set.
pub fn build_prompt(request: &CaptionRequest) -> String {
    let platform = if request.target == ANY_TARGET {
        ANY_TARGET_LABEL
    } else {
        request.target.as_str()
    };

    let mut prompt = format!(
        "Buat caption untuk {} menggunakan bahasa Indonesia",
        platform
    );

    if request.genz {
        prompt.push_str(GENZ_CLAUSE);
    }
    if request.galau {
        prompt.push_str(GALAU_CLAUSE);
    }

    prompt.push_str(" dari kalimat:\n\n ");
    prompt.push_str(&request.caption);
    prompt
}

/// Normalize a caption before prompt construction
///
/// Mirrors the client-side normalization of the original app: first
/// character uppercased, remainder lowercased. Unicode-aware.
pub fn normalize_caption(caption: &str) -> String {
    let mut chars = caption.chars();
    match chars.next() {
        Some(first) => {
            let mut normalized: String = first.to_uppercase().collect();
            normalized.push_str(&chars.as_str().to_lowercase());
            normalized
        }
        None => String::new(),
    }
}
