pub mod errors;
pub mod pbkdf2;
pub mod random;

pub use errors::PasswordError;
pub use pbkdf2::PasswordHasher;
pub use pbkdf2::DEFAULT_ITERATIONS;
pub use random::OsRandom;
pub use random::SecureRandom;
