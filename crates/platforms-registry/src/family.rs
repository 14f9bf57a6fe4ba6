//! Per-OS platform tables.

use crate::platform::Platform;

/// A named constant table of descriptors for one OS family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformFamily {
    /// Family name (e.g., "android").
    pub name: &'static str,
    /// Descriptors in declaration order.
    pub platforms: &'static [Platform],
}

impl PlatformFamily {
    pub const fn new(name: &'static str, platforms: &'static [Platform]) -> Self {
        Self { name, platforms }
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
