//! Byte ↔ text transcoding with unpadded base64url.

use std::borrow::Cow;

use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{CodecError, Result};

/// Decoder that takes the URL-safe alphabet with or without `=` padding.
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes as unpadded base64url. Never emits `+`, `/` or `=`.
pub fn to_text(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Decode base64url text, padded or not.
///
/// `+` and `/` from the standard alphabet are read as `-` and `_` so tokens
/// from producers that forgot the URL-safe mapping still decode.
pub fn from_text(text: &str) -> Result<Vec<u8>> {
    let normalized: Cow<'_, str> = if text.contains(['+', '/']) {
        Cow::Owned(text.replace('+', "-").replace('/', "_"))
    } else {
        Cow::Borrowed(text)
    };

    URL_SAFE_LENIENT
        .decode(normalized.as_bytes())
        .map_err(|e| CodecError::MalformedToken(e.to_string()))
}
