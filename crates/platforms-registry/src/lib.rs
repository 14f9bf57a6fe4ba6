//! Static registry of supported platform descriptors.
//!
//! The registry is assembled from per-OS constant tables:
//! - **Android:** `android::FAMILY`
//! - **iOS:** `ios::FAMILY`
//!
//! Tables are concatenated once, in declaration order, into a frozen
//! [`PlatformRegistry`]. Adding a platform family means adding one constant
//! table and listing it in [`BUILTIN_FAMILIES`].

pub mod android;
pub mod family;
pub mod ios;
pub mod platform;
pub mod registry;

pub use family::PlatformFamily;
pub use platform::Platform;
pub use registry::{supported_platforms, PlatformRegistry, BUILTIN_FAMILIES};
