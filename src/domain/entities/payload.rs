//! Encoded image payload.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Raw image bytes carried as base64 text.
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload(String);

impl ImagePayload {
    /// Encodes raw image bytes.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Wraps already-encoded text. Returns `None` when the text is empty.
    #[must_use]
    pub fn from_encoded(encoded: impl Into<String>) -> Option<Self> {
        let encoded = encoded.into();
        if encoded.is_empty() {
            return None;
        }
        Some(Self(encoded))
    }

    /// Returns the base64 text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the encoded text.
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        self.0.len()
    }

    /// Decodes the payload back into image bytes.
    ///
    /// # Errors
    /// Returns error if the stored text is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.0)
    }
}

impl fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImagePayload")
            .field("encoded_len", &self.0.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_survive_encoding() {
        let bytes = [0x89, b'P', b'N', b'G', 0, 255];
        let payload = ImagePayload::from_bytes(&bytes);

        assert_eq!(payload.as_str(), "iVBORwD/");
        assert_eq!(payload.decode().unwrap(), bytes);
    }

    #[test]
    fn test_empty_encoded_rejected() {
        assert!(ImagePayload::from_encoded("").is_none());
        assert!(ImagePayload::from_encoded("aGVsbG8=").is_some());
    }

    #[test]
    fn test_debug_hides_content() {
        let payload = ImagePayload::from_encoded("aGVsbG8=").unwrap();
        assert_eq!(format!("{payload:?}"), "ImagePayload { encoded_len: 8 }");
    }
}
