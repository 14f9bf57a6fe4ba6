//! Registry exporter.

use platforms_registry::{Platform, PlatformRegistry};

use crate::config::{ExportConfig, ExportFormat};
use crate::error::Result;
use crate::{binary, json};

/// Serializes a registry snapshot according to an [`ExportConfig`].
///
/// Each call allocates and returns a new buffer; nothing is cached.
#[derive(Debug, Clone)]
pub struct Exporter<'a> {
    registry: &'a PlatformRegistry,
    config: ExportConfig,
}

impl Exporter<'static> {
    /// Exporter over the built-in registry with the default config.
    pub fn builtin() -> Self {
        Self::new(PlatformRegistry::builtin())
    }
}

impl<'a> Exporter<'a> {
    pub fn new(registry: &'a PlatformRegistry) -> Self {
        Self::with_config(registry, ExportConfig::default())
    }

    pub fn with_config(registry: &'a PlatformRegistry, config: ExportConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    fn platforms(&self) -> &[Platform] {
        self.registry.platforms()
    }

    /// Encode the registry as a JSON array, indented if `pretty` is set.
    pub fn json(&self) -> Result<Vec<u8>> {
        let bytes = if self.config.pretty {
            json::encode_pretty(self.platforms())?
        } else {
            json::encode(self.platforms())?
        };
        tracing::debug!(
            "Exported {} platforms as json ({} bytes)",
            self.registry.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Encode the registry as a protobuf `PlatformList`.
    pub fn binary(&self) -> Result<Vec<u8>> {
        let bytes = binary::encode(self.platforms())?;
        tracing::debug!(
            "Exported {} platforms as binary ({} bytes)",
            self.registry.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// Encode the registry in the configured format.
    pub fn export(&self) -> Result<Vec<u8>> {
        match self.config.format {
            ExportFormat::Json => self.json(),
            ExportFormat::Binary => self.binary(),
        }
    }
}

/// All supported platforms as a compact JSON array.
pub fn export_json() -> Result<Vec<u8>> {
    Exporter::builtin().json()
}

/// All supported platforms as a protobuf `PlatformList`.
pub fn export_binary() -> Result<Vec<u8>> {
    Exporter::builtin().binary()
}
