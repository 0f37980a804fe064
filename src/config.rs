use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SUMMARIZE_PATH: &str = "/summarize";
pub const DEFAULT_HEALTH_PATH: &str = "/";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
}

/// Where the summarization service lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub base_url: String,
    pub summarize_path: String,
    pub health_path: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "meeting-notes".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            summarize_path: DEFAULT_SUMMARIZE_PATH.to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
        }
    }
}

impl ServiceConfig {
    /// Full URL of the `POST /summarize` endpoint
    pub fn summarize_url(&self) -> String {
        join_url(&self.base_url, &self.summarize_path)
    }

    /// Full URL of the liveness endpoint
    pub fn health_url(&self) -> String {
        join_url(&self.base_url, &self.health_path)
    }
}

impl Config {
    /// Load configuration from built-in defaults, an optional file, then
    /// `MEETING_NOTES_*` environment variables (`__` separates nested keys).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .set_default("service.name", "meeting-notes")?
            .set_default("service.base_url", DEFAULT_BASE_URL)?
            .set_default("service.summarize_path", DEFAULT_SUMMARIZE_PATH)?
            .set_default("service.health_path", DEFAULT_HEALTH_PATH)?
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("MEETING_NOTES")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .with_context(|| format!("Failed to load config from {}", path))?;

        settings
            .try_deserialize()
            .context("Invalid meeting-notes configuration")
    }
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
