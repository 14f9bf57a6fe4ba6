//! Platform descriptor.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Version bound meaning "no restriction".
pub const ANY_VERSION: &str = "Any";

/// A supported operating system target and the icon used to display it.
///
/// Descriptors in the constant tables borrow `'static` text; descriptors
/// decoded from an export own theirs. Equality compares the text only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Platform {
    name: Cow<'static, str>,
    min_version: Cow<'static, str>,
    max_version: Cow<'static, str>,
    icon_id: Cow<'static, str>,
}

impl Platform {
    /// Build a descriptor from static text, usable in `const` tables.
    pub const fn from_static(
        name: &'static str,
        min_version: &'static str,
        max_version: &'static str,
        icon_id: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            min_version: Cow::Borrowed(min_version),
            max_version: Cow::Borrowed(max_version),
            icon_id: Cow::Borrowed(icon_id),
        }
    }

    /// Build a descriptor from owned or borrowed text.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        min_version: impl Into<Cow<'static, str>>,
        max_version: impl Into<Cow<'static, str>>,
        icon_id: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            min_version: min_version.into(),
            max_version: max_version.into(),
            icon_id: icon_id.into(),
        }
    }

    /// Display name (e.g., "Android", "iOS").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowest supported OS version, or `"Any"`.
    pub fn min_version(&self) -> &str {
        &self.min_version
    }

    /// Highest supported OS version, or `"Any"`.
    pub fn max_version(&self) -> &str {
        &self.max_version
    }

    /// Identifier used by UIs to look up the platform icon.
    pub fn icon_id(&self) -> &str {
        &self.icon_id
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}..{})",
            self.name, self.min_version, self.max_version
        )
    }
}
