//! Public site identity

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    #[serde(default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            contact_email: default_contact_email(),
        }
    }
}

fn default_name() -> String {
    "Agency".to_string()
}

fn default_tagline() -> String {
    "Design and development for the web".to_string()
}

fn default_contact_email() -> String {
    "hello@example.com".to_string()
}
