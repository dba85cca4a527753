//! Application Configuration
//!
//! Compile-time settings for the REST client.
//! `DEVBOARD_API_BASE` overrides the API origin at build time
//! (e.g. `DEVBOARD_API_BASE=http://localhost:8000 trunk build`);
//! the default is same-origin.

use std::sync::OnceLock;

/// Characters shown in a card's description preview
pub const PREVIEW_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Origin prepended to every request path, without trailing slash
    pub api_base: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::with_base(option_env!("DEVBOARD_API_BASE").unwrap_or(""))
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            api_base: base.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Absolute (or origin-relative) URL for an API path
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base, path)
        } else {
            format!("{}/{}", self.api_base, path)
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Process-wide config, built on first use
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_origin_urls() {
        let cfg = AppConfig::with_base("");
        assert_eq!(cfg.url("/api/workspaces"), "/api/workspaces");
        assert_eq!(cfg.url("tasks"), "/tasks");
    }

    #[test]
    fn test_base_trailing_slash_trimmed() {
        let cfg = AppConfig::with_base("http://localhost:8000/");
        assert_eq!(cfg.api_base, "http://localhost:8000");
        assert_eq!(cfg.url("/tasks/3"), "http://localhost:8000/tasks/3");
    }
}
