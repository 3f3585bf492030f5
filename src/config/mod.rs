//! Configuration module

pub mod settings;

pub use settings::{LoggingConfig, OpenAIConfig, ServerConfig, Settings};
