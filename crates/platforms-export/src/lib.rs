//! JSON and protobuf export of the supported platform registry.
//!
//! ## Formats
//!
//! ```text
//! JSON:   [{"Name":..,"MinVersion":..,"MaxVersion":..,"IconId":..}, ...]
//!
//! Binary (proto3):
//!   message Platform {
//!     string name        = 1;
//!     string min_version = 2;
//!     string max_version = 3;
//!     string icon_id     = 4;
//!   }
//!   message PlatformList {
//!     repeated Platform platforms = 1;
//!   }
//! ```
//!
//! Both encodings preserve registry order: Android entries, then iOS.

pub mod binary;
pub mod config;
pub mod error;
pub mod exporter;
pub mod json;
pub mod wire;

pub use config::{ExportConfig, ExportFormat};
pub use error::{ExportError, Result};
pub use exporter::{export_binary, export_json, Exporter};
