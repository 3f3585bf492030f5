//! Business services module

pub mod client;
pub mod prompt;

pub use client::CompletionClient;
pub use prompt::{build_prompt, normalize_caption};
