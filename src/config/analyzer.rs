//! Website analyzer capture settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::split_list;

#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzerConfig {
    /// Page load timeout in seconds
    #[serde(default = "default_navigation_timeout")]
    pub navigation_timeout_secs: u64,

    #[serde(default = "default_viewport_width")]
    pub viewport_width: u32,

    #[serde(default = "default_viewport_height")]
    pub viewport_height: u32,

    /// Hosts that get the e-commerce criteria (comma-separated)
    pub ecommerce_domains: Option<String>,

    /// Path to a Chrome/Chromium binary; autodetected when unset
    pub chrome_executable: Option<String>,

    /// Disable the Chromium sandbox (containers)
    #[serde(default)]
    pub no_sandbox: bool,
}

impl AnalyzerConfig {
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn ecommerce_domain_list(&self) -> Vec<String> {
        self.ecommerce_domains
            .as_deref()
            .map(split_list)
            .unwrap_or_default()
            .into_iter()
            .map(|d| d.to_lowercase())
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.navigation_timeout_secs == 0 || self.navigation_timeout_secs > 300 {
            return Err(ValidationError::InvalidNavigationTimeout);
        }
        if self.viewport_width == 0 || self.viewport_height == 0 {
            return Err(ValidationError::InvalidViewport);
        }
        Ok(())
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            navigation_timeout_secs: default_navigation_timeout(),
            viewport_width: default_viewport_width(),
            viewport_height: default_viewport_height(),
            ecommerce_domains: None,
            chrome_executable: None,
            no_sandbox: false,
        }
    }
}

fn default_navigation_timeout() -> u64 {
    30
}

fn default_viewport_width() -> u32 {
    1280
}

fn default_viewport_height() -> u32 {
    800
}
