//! Password-credential verification for a broker's pluggable auth chain
//!
//! Derives a salted, iterated password hash per identity, verifies supplied
//! passwords against it in constant time, and provides a reversible base64
//! encoding for persisting binary hash/salt material:
//! - Password hashing (PBKDF2-HMAC-SHA512, per-identity random salt)
//! - Timing-safe hash comparison
//! - A three-way Accept/Reject/Defer decision engine over an identity store
//!
//! The identity registry itself, the broker's dispatch mechanism, and any
//! success-hook implementation stay outside this crate; the engine reaches
//! them through the [`IdentityStore`] and [`SuccessNotifier`] seams.
//!
//! # Examples
//!
//! ## Setting and verifying a password
//! ```
//! use auth::{AuthRequest, Authenticator, Identity, IdentityStore, Outcome, PasswordHasher};
//!
//! struct SingleUser(Identity);
//!
//! impl IdentityStore for SingleUser {
//!     fn lookup(&self, username: &str) -> Option<Identity> {
//!         (self.0.username == username).then(|| self.0.clone())
//!     }
//! }
//!
//! let mut hasher = PasswordHasher::new();
//! let mut bob = Identity::new("bob");
//! bob.credential = hasher.set_password("correct horse").unwrap();
//!
//! let engine = Authenticator::new(SingleUser(bob));
//!
//! let attempt = AuthRequest {
//!     username: Some("bob"),
//!     password: Some("correct horse"),
//!     ..AuthRequest::default()
//! };
//! assert_eq!(engine.check(&attempt), Outcome::Accept);
//!
//! let attempt = AuthRequest {
//!     username: Some("bob"),
//!     password: Some("guess"),
//!     ..AuthRequest::default()
//! };
//! assert_eq!(engine.check(&attempt), Outcome::Reject);
//! ```
//!
//! ## Persisting a credential as text
//! ```
//! use auth::{CredentialRecord, PasswordHasher};
//!
//! let record = PasswordHasher::new().set_password("hunter2").unwrap();
//!
//! let persisted = record.to_persisted().unwrap();
//! let restored = CredentialRecord::from_persisted(&persisted).unwrap();
//! assert_eq!(restored, record);
//! ```

pub mod authenticator;
pub mod codec;
pub mod compare;
pub mod credential;
pub mod identity;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthRequest;
pub use authenticator::Authenticator;
pub use authenticator::Outcome;
pub use authenticator::SuccessNotifier;
pub use codec::FormatError;
pub use compare::constant_time_eq;
pub use credential::CredentialRecord;
pub use credential::PersistedCredential;
pub use credential::RecordError;
pub use identity::Identity;
pub use identity::IdentityStore;
pub use password::PasswordError;
pub use password::PasswordHasher;
