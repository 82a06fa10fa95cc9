use thiserror::Error;

/// Error type for password hashing operations.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    /// Caller-side misconfiguration of the stored record.
    #[error("Iteration count must be at least 1, got {0}")]
    InvalidIterations(u32),

    /// The secure random source could not produce salt bytes.
    #[error("Secure random source failed: {0}")]
    RandomSource(String),

    /// The key derivation function itself failed.
    #[error("Key derivation failed: {0}")]
    Derivation(String),
}
