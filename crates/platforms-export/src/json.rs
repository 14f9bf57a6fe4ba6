//! JSON encoding of platform lists.

use platforms_registry::Platform;

use crate::error::Result;

/// Encode `platforms` as a compact JSON array.
pub fn encode(platforms: &[Platform]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(platforms)?)
}

/// Encode `platforms` as an indented JSON array.
pub fn encode_pretty(platforms: &[Platform]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(platforms)?)
}

/// Decode a JSON array produced by [`encode`] or [`encode_pretty`].
pub fn decode(bytes: &[u8]) -> Result<Vec<Platform>> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use platforms_registry::supported_platforms;

    #[test]
    fn builtin_json_layout() {
        let bytes = encode(supported_platforms()).unwrap();
        assert_eq!(
            std::str::from_utf8(&bytes).unwrap(),
            concat!(
                r#"[{"Name":"Android","MinVersion":"Any","MaxVersion":"Any","IconId":"android"},"#,
                r#"{"Name":"iOS","MinVersion":"Any","MaxVersion":"Any","IconId":"ios"}]"#
            )
        );
    }

    #[test]
    fn empty_slice_is_empty_array() {
        assert_eq!(encode(&[]).unwrap(), b"[]");
        assert!(decode(b"[]").unwrap().is_empty());
    }

    #[test]
    fn pretty_output_decodes_to_same_platforms() {
        let bytes = encode_pretty(supported_platforms()).unwrap();
        assert!(bytes.contains(&b'\n'));
        assert_eq!(decode(&bytes).unwrap(), supported_platforms());
    }

    #[test]
    fn missing_field_rejected() {
        let result = decode(br#"[{"Name":"Android","MinVersion":"Any","MaxVersion":"Any"}]"#);
        assert!(matches!(result, Err(ExportError::Json(_))));
    }
}
