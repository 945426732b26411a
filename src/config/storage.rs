//! File storage configuration: JSON fallback store, uploads and admin assets.

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one `<resource>.json` file per resource
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Directory uploaded images are written to and served from
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Built admin SPA served under `/admin`
    #[serde(default = "default_admin_assets_dir")]
    pub admin_assets_dir: PathBuf,

    /// Largest accepted upload, in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: u64,
}

impl StorageConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__DATA_DIR"));
        }
        if self.uploads_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE__UPLOADS_DIR"));
        }
        if self.max_upload_bytes == 0 {
            return Err(ValidationError::InvalidUploadLimit);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            uploads_dir: default_uploads_dir(),
            admin_assets_dir: default_admin_assets_dir(),
            max_upload_bytes: default_max_upload_bytes(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_admin_assets_dir() -> PathBuf {
    PathBuf::from("admin/dist")
}

fn default_max_upload_bytes() -> u64 {
    5 * 1024 * 1024
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_upload_limit_rejected() {
        let config = StorageConfig {
            max_upload_bytes: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidUploadLimit)));
    }
}
