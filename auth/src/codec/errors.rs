use thiserror::Error;

/// Error type for base64 text handling.
#[derive(Debug, Clone, Error)]
pub enum FormatError {
    #[error("Malformed base64 input: {0}")]
    Malformed(#[from] base64::DecodeError),

    #[error("Non-empty input decoded to zero bytes")]
    EmptyDecode,
}
