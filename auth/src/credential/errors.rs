use thiserror::Error;

use crate::codec::FormatError;

/// Error type for persisted-credential conversion.
#[derive(Debug, Clone, Error)]
pub enum RecordError {
    #[error("Invalid base64 in credential field: {0}")]
    Format(#[from] FormatError),

    #[error("Field `{field}` must decode to {expected} bytes, got {actual}")]
    Length {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
}
