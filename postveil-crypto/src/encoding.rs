//! Transport encoding conversions.
//!
//! Protected fields travel as base64 text; key material may arrive as a
//! PEM body with embedded newlines. The legacy binary-string form (one
//! char per byte, code points 0-255) is supported in both directions for
//! hosts that hand us already-decoded binary-safe strings.

use crate::error::{CryptoError, CryptoResult};
use base64::{engine::general_purpose::STANDARD, Engine};

/// Maps each character of a binary-safe string to one byte.
///
/// Output length always equals the character count. Characters above
/// U+00FF have no single-byte representation and are rejected rather
/// than truncated or re-encoded.
pub fn text_to_bytes(text: &str) -> CryptoResult<Vec<u8>> {
    text.chars()
        .map(|c| {
            u8::try_from(c as u32).map_err(|_| {
                CryptoError::Decoding(format!(
                    "character U+{:04X} is not a single byte",
                    c as u32
                ))
            })
        })
        .collect()
}

/// Maps each byte to one character (exact inverse of [`text_to_bytes`]).
pub fn bytes_to_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Encodes bytes as standard padded base64.
pub fn base64_encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decodes standard base64 text to its exact byte sequence.
///
/// ASCII whitespace is stripped first so PEM-style line-wrapped input
/// decodes the same as a single-line string (forgiving-base64, matching
/// what browsers accept from `atob`).
pub fn base64_decode(text: &str) -> CryptoResult<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    STANDARD
        .decode(compact)
        .map_err(|e| CryptoError::Decoding(format!("invalid base64: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_to_bytes_maps_code_points() {
        let bytes = text_to_bytes("Ab\u{00FF}\0").unwrap();
        assert_eq!(bytes, vec![0x41, 0x62, 0xFF, 0x00]);
    }

    #[test]
    fn text_to_bytes_rejects_multibyte_chars() {
        let result = text_to_bytes("caf\u{00E9}\u{0100}");
        assert!(matches!(result, Err(CryptoError::Decoding(_))));
    }

    #[test]
    fn bytes_to_text_is_inverse() {
        let all: Vec<u8> = (0..=255).collect();
        let text = bytes_to_text(&all);
        assert_eq!(text.chars().count(), 256);
        assert_eq!(text_to_bytes(&text).unwrap(), all);
    }

    #[test]
    fn base64_decode_rejects_garbage() {
        assert!(base64_decode("not-valid-base64!!!").is_err());
        assert!(base64_decode("AAA").is_err()); // bad padding
    }

    #[test]
    fn base64_decode_strips_whitespace() {
        let encoded = base64_encode(b"hello world, hello world");
        let wrapped = format!("{}\n{}\n", &encoded[..16], &encoded[16..]);
        assert_eq!(base64_decode(&wrapped).unwrap(), b"hello world, hello world");
    }

    #[test]
    fn empty_round_trip() {
        assert_eq!(base64_encode(b""), "");
        assert_eq!(base64_decode("").unwrap(), Vec::<u8>::new());
        assert_eq!(text_to_bytes("").unwrap(), Vec::<u8>::new());
    }
}
