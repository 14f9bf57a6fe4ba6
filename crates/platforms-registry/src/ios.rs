//! iOS platform table.

use crate::family::PlatformFamily;
use crate::platform::{Platform, ANY_VERSION};

pub const PLATFORMS: &[Platform] = &[Platform::from_static(
    "iOS",
    ANY_VERSION,
    ANY_VERSION,
    "ios",
)];

pub const FAMILY: PlatformFamily = PlatformFamily::new("ios", PLATFORMS);
