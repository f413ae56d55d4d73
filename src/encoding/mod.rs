//! Base64 and data-URL handling for reference and generated images

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::{AppError, Result};

/// A user-supplied reference image: raw bytes plus the MIME type reported
/// by the uploader. The MIME type is not validated here; validation
/// happens upstream at the API boundary.
#[derive(Debug, Clone)]
pub struct ReferenceImage {
    pub data: Vec<u8>,
    pub mime_type: String,
}

impl ReferenceImage {
    pub fn new(data: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            data,
            mime_type: mime_type.into(),
        }
    }

    /// Base64 payload suitable for an inline request part
    pub fn to_base64(&self) -> String {
        encode(&self.data)
    }
}

/// Encode binary data to a base64 string
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Decode a base64 string to binary data
///
/// Accepts both bare base64 and the data-URL form
/// (`data:image/png;base64,...`).
pub fn decode(encoded: &str) -> Result<Vec<u8>> {
    let data = if encoded.contains(',') {
        encoded.split(',').last().unwrap_or(encoded)
    } else {
        encoded
    };

    STANDARD
        .decode(data.trim())
        .map_err(|e| AppError::InvalidRequest(format!("Invalid base64 data: {}", e)))
}

/// Check if a string is valid base64 (bare or data-URL form)
pub fn is_valid(data: &str) -> bool {
    let data = if data.contains(',') {
        data.split(',').last().unwrap_or(data)
    } else {
        data
    };

    STANDARD.decode(data.trim()).is_ok()
}

/// Build a self-contained data URL from a MIME type and a base64 payload
pub fn data_url(mime_type: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_payload)
}

/// Extract the MIME type from a data URL
pub fn mime_from_data_url(url: &str) -> Option<&str> {
    let rest = url.strip_prefix("data:")?;
    let end = rest.find(';')?;
    Some(&rest[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode() {
        let original = b"Hello, World!";
        let encoded = encode(original);
        let decoded = decode(&encoded).unwrap();
        assert_eq!(original.as_slice(), decoded.as_slice());
    }

    #[test]
    fn test_decode_data_url() {
        let url = "data:image/png;base64,SGVsbG8sIFdvcmxkIQ==";
        let decoded = decode(url).unwrap();
        assert_eq!(b"Hello, World!", decoded.as_slice());
    }

    #[test]
    fn test_decode_invalid_is_error() {
        assert!(decode("not valid base64!!!").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid("SGVsbG8sIFdvcmxkIQ=="));
        assert!(is_valid("data:image/png;base64,SGVsbG8sIFdvcmxkIQ=="));
        assert!(!is_valid("not valid base64!!!"));
    }

    #[test]
    fn test_data_url_roundtrip() {
        let payload = encode(b"test data");
        let url = data_url("image/png", &payload);
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(decode(&url).unwrap(), b"test data");
    }

    #[test]
    fn test_mime_from_data_url() {
        assert_eq!(
            mime_from_data_url("data:image/png;base64,abc"),
            Some("image/png")
        );
        assert_eq!(
            mime_from_data_url("data:image/jpeg;base64,abc"),
            Some("image/jpeg")
        );
        assert_eq!(mime_from_data_url("not a data url"), None);
    }

    #[test]
    fn test_reference_image_to_base64() {
        let img = ReferenceImage::new(vec![1, 2, 3, 4], "image/png");
        assert_eq!(img.to_base64(), encode(&[1, 2, 3, 4]));
    }
}
