use rand::rngs::OsRng;
use rand::RngCore;

use super::errors::PasswordError;

/// Capability trait for cryptographically unpredictable bytes.
///
/// Injected into the hasher so salt generation can be replaced with a
/// deterministic fake in tests. Filling may transiently block on entropy
/// availability; that is acceptable and not an error unless the source
/// itself reports failure.
pub trait SecureRandom {
    /// Fill `buf` entirely with random bytes.
    ///
    /// # Errors
    /// * `RandomSource` - The underlying source reported failure
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), PasswordError>;
}

/// The operating system's random source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), PasswordError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| PasswordError::RandomSource(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut buf = [0u8; 16];
        OsRandom.fill(&mut buf).expect("Failed to draw random bytes");

        // 16 zero bytes from a working source is a 2^-128 event.
        assert_ne!(buf, [0u8; 16]);
    }
}
