//! Android platform table.

use crate::family::PlatformFamily;
use crate::platform::{Platform, ANY_VERSION};

pub const PLATFORMS: &[Platform] = &[Platform::from_static(
    "Android",
    ANY_VERSION,
    ANY_VERSION,
    "android",
)];

pub const FAMILY: PlatformFamily = PlatformFamily::new("android", PLATFORMS);
