//! Application configuration
//!
//! Loaded from TOML. Every field has a default, so an empty document is a
//! valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::tools::QueueLimits;

/// Front-end settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Product name shown in the header and footer
    pub app_name: String,
    /// How long a toast stays up before it dismisses itself
    pub toast_duration_ms: u64,
    /// File name offered for the generated PDF
    pub output_file_name: String,
    /// Maximum images per conversion
    pub max_files: usize,
    /// MIME types the converter accepts
    pub accepted_types: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let limits = QueueLimits::default();
        Self {
            app_name: "JPG to PDF Pro".to_string(),
            toast_duration_ms: 5_000,
            output_file_name: "converted.pdf".to_string(),
            max_files: limits.max_files,
            accepted_types: limits.accepted_types,
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the front end cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.toast_duration_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "toast_duration_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.max_files == 0 {
            return Err(ConfigError::Invalid {
                field: "max_files",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.accepted_types.is_empty() {
            return Err(ConfigError::Invalid {
                field: "accepted_types",
                reason: "at least one type is required".to_string(),
            });
        }
        if !self.output_file_name.to_ascii_lowercase().ends_with(".pdf") {
            return Err(ConfigError::Invalid {
                field: "output_file_name",
                reason: format!("{:?} does not end in .pdf", self.output_file_name),
            });
        }
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn queue_limits(&self) -> QueueLimits {
        QueueLimits {
            max_files: self.max_files,
            accepted_types: self.accepted_types.clone(),
        }
    }
}
