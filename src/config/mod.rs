//! Configuration module

mod settings;

pub use settings::{
    GeminiConfig, LoggingConfig, OrchestratorConfig, ServerConfig, Settings,
};
