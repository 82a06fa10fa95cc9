use pbkdf2::hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha512;

use super::errors::PasswordError;
use super::random::OsRandom;
use super::random::SecureRandom;
use crate::credential::CredentialRecord;
use crate::credential::HASH_LEN;
use crate::credential::SALT_LEN;

/// Iteration count applied when a new password is set.
pub const DEFAULT_ITERATIONS: u32 = 101_000;

/// Password hashing implementation.
///
/// Derives fixed-length hashes with PBKDF2-HMAC-SHA512. The random source
/// used for salt generation is an explicit capability so tests can supply
/// a deterministic fake; the digest is fixed by type, so an unresolvable
/// digest cannot occur at runtime.
pub struct PasswordHasher<R = OsRandom> {
    random: R,
}

impl PasswordHasher<OsRandom> {
    /// Create a hasher backed by the operating system's random source.
    pub fn new() -> Self {
        Self { random: OsRandom }
    }
}

impl Default for PasswordHasher<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRandom> PasswordHasher<R> {
    /// Create a hasher with an explicit random source.
    pub fn with_random(random: R) -> Self {
        Self { random }
    }

    /// Hash a new password into a fresh credential record.
    ///
    /// Draws a fresh salt of [`SALT_LEN`] bytes and applies
    /// [`DEFAULT_ITERATIONS`]. The returned record replaces any previous
    /// record for the identity; the caller owns exclusivity of that swap.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// A valid credential record holding the new salt, iteration count,
    /// and derived hash
    ///
    /// # Errors
    /// * `RandomSource` - The random source failed to produce salt bytes
    /// * `Derivation` - The key derivation function failed
    pub fn set_password(&mut self, password: &str) -> Result<CredentialRecord, PasswordError> {
        let mut salt = [0u8; SALT_LEN];
        self.random.fill(&mut salt)?;

        let hash = derive_hash(password, &salt, DEFAULT_ITERATIONS)?;

        Ok(CredentialRecord {
            salt,
            iterations: DEFAULT_ITERATIONS,
            hash,
            valid: true,
        })
    }

    /// Re-derive the hash of a supplied password against a stored record.
    ///
    /// Reuses the record's salt and iteration count unchanged; identical
    /// `(password, salt, iterations)` always yields identical output.
    ///
    /// # Arguments
    /// * `password` - Plaintext password supplied by the connecting client
    /// * `record` - Stored credential record providing salt and iterations
    ///
    /// # Returns
    /// The derived hash, to be compared against `record.hash` in
    /// constant time
    ///
    /// # Errors
    /// * `InvalidIterations` - The record's iteration count is zero
    /// * `Derivation` - The key derivation function failed
    pub fn derive(
        &self,
        password: &str,
        record: &CredentialRecord,
    ) -> Result<[u8; HASH_LEN], PasswordError> {
        derive_hash(password, &record.salt, record.iterations)
    }
}

fn derive_hash(
    password: &str,
    salt: &[u8; SALT_LEN],
    iterations: u32,
) -> Result<[u8; HASH_LEN], PasswordError> {
    if iterations < 1 {
        return Err(PasswordError::InvalidIterations(iterations));
    }

    let mut hash = [0u8; HASH_LEN];
    pbkdf2::<Hmac<Sha512>>(password.as_bytes(), salt, iterations, &mut hash)
        .map_err(|e| PasswordError::Derivation(e.to_string()))?;

    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hands out a fixed byte pattern instead of entropy.
    struct FixedRandom([u8; SALT_LEN]);

    impl SecureRandom for FixedRandom {
        fn fill(&mut self, buf: &mut [u8]) -> Result<(), PasswordError> {
            for (dst, src) in buf.iter_mut().zip(self.0.iter().cycle()) {
                *dst = *src;
            }
            Ok(())
        }
    }

    struct BrokenRandom;

    impl SecureRandom for BrokenRandom {
        fn fill(&mut self, _buf: &mut [u8]) -> Result<(), PasswordError> {
            Err(PasswordError::RandomSource(
                "entropy pool unavailable".to_string(),
            ))
        }
    }

    fn record_with(salt: [u8; SALT_LEN], iterations: u32) -> CredentialRecord {
        CredentialRecord {
            salt,
            iterations,
            hash: [0; HASH_LEN],
            valid: true,
        }
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let hasher = PasswordHasher::new();
        let record = record_with([9; SALT_LEN], 3);

        let first = hasher.derive("hunter2", &record).expect("Failed to derive");
        let second = hasher.derive("hunter2", &record).expect("Failed to derive");

        assert_eq!(first, second);
    }

    #[test]
    fn test_known_answer_sha512() {
        // PBKDF2-HMAC-SHA512("password", "salt", 1, dkLen=64).
        let vector = "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252\
                      c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce";
        let mut expected = [0u8; HASH_LEN];
        for (i, byte) in expected.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&vector[2 * i..2 * i + 2], 16).expect("Bad hex");
        }

        let mut derived = [0u8; HASH_LEN];
        pbkdf2::<Hmac<Sha512>>(b"password", b"salt", 1, &mut derived).expect("Failed to derive");

        assert_eq!(derived, expected);
    }

    #[test]
    fn test_output_is_sensitive_to_each_input() {
        let hasher = PasswordHasher::new();
        let base_salt = [9; SALT_LEN];
        let base = hasher
            .derive("hunter2", &record_with(base_salt, 3))
            .expect("Failed to derive");

        let other_password = hasher
            .derive("hunter3", &record_with(base_salt, 3))
            .expect("Failed to derive");
        assert_ne!(base, other_password);

        let mut other_salt = base_salt;
        other_salt[0] ^= 1;
        let salted = hasher
            .derive("hunter2", &record_with(other_salt, 3))
            .expect("Failed to derive");
        assert_ne!(base, salted);

        let iterated = hasher
            .derive("hunter2", &record_with(base_salt, 4))
            .expect("Failed to derive");
        assert_ne!(base, iterated);
    }

    #[test]
    fn test_set_password_uses_injected_salt_and_default_iterations() {
        let salt = [0xab; SALT_LEN];
        let mut hasher = PasswordHasher::with_random(FixedRandom(salt));

        let record = hasher.set_password("hunter2").expect("Failed to hash");

        assert!(record.valid);
        assert_eq!(record.salt, salt);
        assert_eq!(record.iterations, DEFAULT_ITERATIONS);
        assert_eq!(
            record.hash,
            derive_hash("hunter2", &salt, DEFAULT_ITERATIONS).expect("Failed to derive")
        );
    }

    #[test]
    fn test_set_password_propagates_random_failure() {
        let mut hasher = PasswordHasher::with_random(BrokenRandom);

        let result = hasher.set_password("hunter2");
        assert!(matches!(result, Err(PasswordError::RandomSource(_))));
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let hasher = PasswordHasher::new();
        let record = record_with([9; SALT_LEN], 0);

        let result = hasher.derive("hunter2", &record);
        assert!(matches!(result, Err(PasswordError::InvalidIterations(0))));
    }
}
