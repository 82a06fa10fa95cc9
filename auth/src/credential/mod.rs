pub mod errors;
pub mod record;

pub use errors::RecordError;
pub use record::CredentialRecord;
pub use record::PersistedCredential;
pub use record::HASH_LEN;
pub use record::SALT_LEN;
