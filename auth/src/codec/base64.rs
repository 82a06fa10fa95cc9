use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::errors::FormatError;

/// Encode bytes as single-line, padded, standard-alphabet base64 text.
///
/// Accepts any byte length, including zero. The output never contains
/// line breaks, so it can be embedded directly in a persisted record.
///
/// # Arguments
/// * `bytes` - Binary data to encode
///
/// # Returns
/// Base64 text representation
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode base64 text back into bytes.
///
/// Inverse of [`encode`]: `decode(encode(b)) == b` for all byte sequences.
///
/// # Arguments
/// * `text` - Base64 text to decode
///
/// # Returns
/// Decoded bytes
///
/// # Errors
/// * `Malformed` - Input contains non-alphabet characters or invalid padding
/// * `EmptyDecode` - Non-empty input decoded to zero bytes; a persisted
///   salt or hash field can never be legitimately empty, so this is
///   treated as corruption rather than an empty result
pub fn decode(text: &str) -> Result<Vec<u8>, FormatError> {
    let bytes = STANDARD.decode(text)?;

    if bytes.is_empty() && !text.is_empty() {
        return Err(FormatError::EmptyDecode);
    }

    Ok(bytes)
}
