//! Protobuf encoding of platform lists.

use prost::Message;

use platforms_registry::Platform;

use crate::error::Result;
use crate::wire::PlatformList;

/// Encode `platforms` as a `PlatformList` message.
pub fn encode(platforms: &[Platform]) -> Result<Vec<u8>> {
    let message = PlatformList::from_platforms(platforms);
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf)?;
    Ok(buf)
}

/// Decode a `PlatformList` message into descriptors, preserving order.
pub fn decode(bytes: &[u8]) -> Result<Vec<Platform>> {
    Ok(PlatformList::decode(bytes)?.into_platforms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use platforms_registry::supported_platforms;

    #[test]
    fn builtin_wire_bytes() {
        let bytes = encode(supported_platforms()).unwrap();
        let mut expected = vec![0x0A, 0x1C];
        expected.extend_from_slice(&[0x0A, 0x07]);
        expected.extend_from_slice(b"Android");
        expected.extend_from_slice(&[0x12, 0x03]);
        expected.extend_from_slice(b"Any");
        expected.extend_from_slice(&[0x1A, 0x03]);
        expected.extend_from_slice(b"Any");
        expected.extend_from_slice(&[0x22, 0x07]);
        expected.extend_from_slice(b"android");
        expected.extend_from_slice(&[0x0A, 0x14]);
        expected.extend_from_slice(&[0x0A, 0x03]);
        expected.extend_from_slice(b"iOS");
        expected.extend_from_slice(&[0x12, 0x03]);
        expected.extend_from_slice(b"Any");
        expected.extend_from_slice(&[0x1A, 0x03]);
        expected.extend_from_slice(b"Any");
        expected.extend_from_slice(&[0x22, 0x03]);
        expected.extend_from_slice(b"ios");
        assert_eq!(bytes, expected);
    }

    #[test]
    fn decode_preserves_order() {
        let bytes = encode(supported_platforms()).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded, supported_platforms());
    }

    #[test]
    fn empty_slice_is_empty_message() {
        let bytes = encode(&[]).unwrap();
        assert!(bytes.is_empty());
        assert!(decode(&bytes).unwrap().is_empty());
    }

    #[test]
    fn truncated_message_rejected() {
        let bytes = encode(supported_platforms()).unwrap();
        let result = decode(&bytes[..bytes.len() - 2]);
        assert!(matches!(result, Err(ExportError::Decode(_))));
    }
}
