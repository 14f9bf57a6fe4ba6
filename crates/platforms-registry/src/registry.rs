//! The frozen, ordered registry of supported platforms.

use std::sync::OnceLock;

use crate::family::PlatformFamily;
use crate::platform::Platform;
use crate::{android, ios};

/// Families making up the built-in registry, in export order.
pub const BUILTIN_FAMILIES: &[PlatformFamily] = &[android::FAMILY, ios::FAMILY];

static BUILTIN: OnceLock<PlatformRegistry> = OnceLock::new();

/// An ordered, immutable sequence of platform descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformRegistry {
    families: Vec<PlatformFamily>,
    platforms: Vec<Platform>,
}

impl PlatformRegistry {
    /// Concatenate `families` in order. An empty list yields an empty registry.
    pub fn from_families(families: &[PlatformFamily]) -> Self {
        let platforms: Vec<Platform> = families
            .iter()
            .flat_map(|family| family.platforms.iter().cloned())
            .collect();
        tracing::debug!(
            "Built platform registry: {} families, {} platforms",
            families.len(),
            platforms.len()
        );
        Self {
            families: families.to_vec(),
            platforms,
        }
    }

    /// The process-wide registry built from [`BUILTIN_FAMILIES`].
    pub fn builtin() -> &'static PlatformRegistry {
        BUILTIN.get_or_init(|| Self::from_families(BUILTIN_FAMILIES))
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn families(&self) -> &[PlatformFamily] {
        &self.families
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Look up a descriptor by name, ignoring ASCII case.
    pub fn find(&self, name: &str) -> Option<&Platform> {
        self.platforms
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }
}

impl<'a> IntoIterator for &'a PlatformRegistry {
    type Item = &'a Platform;
    type IntoIter = std::slice::Iter<'a, Platform>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// All supported platforms: Android entries first, then iOS.
pub fn supported_platforms() -> &'static [Platform] {
    PlatformRegistry::builtin().platforms()
}
