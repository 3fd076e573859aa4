pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::{FilterCopyError, TIMESTAMP_FORMAT};
pub use models::{CopyPlan, CopyResponse, CopyResult, FilterCriteria, FilterRequest};
pub use server::{router, ServerConfig, ServerState};
pub use services::{copy_all, filter, filter_and_copy, validate};

// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            log_level: "info".to_string(),
        }
    }
}
