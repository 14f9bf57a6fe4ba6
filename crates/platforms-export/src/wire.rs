//! Protobuf messages for the binary export.
//!
//! Field numbers are part of the external schema and must not change.

use platforms_registry::Platform;

#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct PlatformMessage {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub min_version: String,
    #[prost(string, tag = "3")]
    pub max_version: String,
    #[prost(string, tag = "4")]
    pub icon_id: String,
}

/// Envelope for a sequence of platforms.
#[derive(Clone, PartialEq, Eq, prost::Message)]
pub struct PlatformList {
    #[prost(message, repeated, tag = "1")]
    pub platforms: Vec<PlatformMessage>,
}

impl From<&Platform> for PlatformMessage {
    fn from(p: &Platform) -> Self {
        Self {
            name: p.name().to_owned(),
            min_version: p.min_version().to_owned(),
            max_version: p.max_version().to_owned(),
            icon_id: p.icon_id().to_owned(),
        }
    }
}

impl From<PlatformMessage> for Platform {
    fn from(m: PlatformMessage) -> Self {
        Platform::new(m.name, m.min_version, m.max_version, m.icon_id)
    }
}

impl PlatformList {
    pub fn from_platforms(platforms: &[Platform]) -> Self {
        Self {
            platforms: platforms.iter().map(PlatformMessage::from).collect(),
        }
    }

    pub fn into_platforms(self) -> Vec<Platform> {
        self.platforms.into_iter().map(Platform::from).collect()
    }
}
