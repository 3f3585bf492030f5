//! Data models module
//!
//! Contains data structures for the caption API and the completion
//! provider API

pub mod caption;
pub mod openai;

pub use caption::{CaptionRequest, CaptionResponse, ANY_TARGET};
pub use openai::{CompletionChoice, CompletionRequest, CompletionResponse};
