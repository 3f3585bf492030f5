//! Caption Generation Service Library
//!
//! Builds deterministic caption prompts and forwards them to an
//! OpenAI-compatible completion API

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, AppState};
pub use models::{caption, openai};
pub use services::{build_prompt, normalize_caption, CompletionClient};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
