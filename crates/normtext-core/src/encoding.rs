//! Encoding resolution and byte decoding.
//!
//! The sniffing heuristic is a pluggable collaborator behind a narrow
//! contract: bytes plus a default label in, a concrete encoding out, never a
//! failure. Resolution uses `chardetng` when the `detect` feature is enabled
//! (the default); otherwise the supplied default label decides.
//!
//! Decoding itself is the one failure-prone step of the pipeline: malformed
//! input under the resolved encoding is a fatal error for that call, never
//! silently replaced.

use encoding_rs::{Encoding, UTF_8};

use crate::errors::{NormError, NormResult};

/// Resolve the encoding of a raw byte sequence.
///
/// Falls back to `default_label` (and to UTF-8 when the label itself is
/// unknown) for empty input or when detection is compiled out.
pub fn resolve_encoding(bytes: &[u8], default_label: &str) -> &'static Encoding {
    let fallback = Encoding::for_label(default_label.as_bytes()).unwrap_or(UTF_8);
    if bytes.is_empty() {
        return fallback;
    }

    #[cfg(feature = "detect")]
    {
        let mut detector = chardetng::EncodingDetector::new();
        detector.feed(bytes, true);
        detector.guess(None, true)
    }

    #[cfg(not(feature = "detect"))]
    {
        fallback
    }
}

/// Decode bytes under a specific encoding.
///
/// A leading BOM overrides the supplied encoding. Malformed sequences are a
/// `Decode` error, not replacement characters.
pub fn decode_as(bytes: &[u8], encoding: &'static Encoding) -> NormResult<String> {
    let (text, actual, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(NormError::decode(format!(
            "malformed input for encoding {}",
            actual.name()
        )));
    }
    Ok(text.into_owned())
}

/// Resolve the encoding of `bytes`, then decode.
pub fn decode(bytes: &[u8], default_label: &str) -> NormResult<String> {
    decode_as(bytes, resolve_encoding(bytes, default_label))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::defaults;

    #[test]
    fn empty_input_uses_default_label() {
        let enc = resolve_encoding(b"", defaults::ENCODING);
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn unknown_label_falls_back_to_utf8() {
        let enc = resolve_encoding(b"", "no-such-encoding");
        assert_eq!(enc.name(), "UTF-8");
    }

    #[test]
    fn valid_utf8_round_trips() {
        let text = decode("grüße".as_bytes(), defaults::ENCODING).unwrap();
        assert_eq!(text, "grüße");
    }

    #[test]
    fn bom_overrides_supplied_encoding() {
        let mut bytes = vec![0xef, 0xbb, 0xbf];
        bytes.extend_from_slice("hi".as_bytes());
        let text = decode_as(&bytes, encoding_rs::WINDOWS_1252).unwrap();
        assert_eq!(text, "hi");
    }

    #[test]
    fn malformed_input_is_fatal() {
        let err = decode_as(&[0x61, 0xff, 0x62], UTF_8).unwrap_err();
        assert_matches!(err, NormError::Decode(_));
    }

    #[cfg(feature = "detect")]
    #[test]
    fn detection_handles_non_utf8_bytes() {
        // "café" in Latin-1; invalid as UTF-8, resolvable by the detector.
        let bytes = [0x63, 0x61, 0x66, 0xe9];
        let text = decode(&bytes, defaults::ENCODING).unwrap();
        assert!(text.starts_with("caf"));
    }
}
