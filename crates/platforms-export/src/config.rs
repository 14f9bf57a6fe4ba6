//! Export configuration.
//!
//! Configuration is read from TOML:
//!
//! ```toml
//! format = "binary"
//! pretty = false
//! ```
//!
//! Missing keys fall back to compact JSON.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};

/// Output encoding for an export.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ExportFormat {
    #[default]
    Json,
    /// Protobuf-encoded `PlatformList`.
    Binary,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Binary => "binary",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "binary" | "protobuf" | "proto" => Ok(ExportFormat::Binary),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for ExportFormat {
    type Error = ExportError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Settings for an [`Exporter`](crate::Exporter).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExportConfig {
    /// Encoding used by `Exporter::export`.
    pub format: ExportFormat,
    /// Indent JSON output. Ignored for binary.
    pub pretty: bool,
}

impl ExportConfig {
    pub fn with_format(format: ExportFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: ExportConfig = toml::from_str(toml_str)?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ExportError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}
