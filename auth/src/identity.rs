use crate::credential::CredentialRecord;

/// One named principal known to the identity registry.
#[derive(Debug, Clone)]
pub struct Identity {
    /// Unique key within the registry.
    pub username: String,
    /// When set, only a connection presenting exactly this client id may
    /// authenticate as this identity.
    pub bound_client_id: Option<String>,
    /// A disabled identity is rejected outright, before any password work.
    pub disabled: bool,
    pub credential: CredentialRecord,
}

/// Lookup seam onto the identity registry.
///
/// The registry's storage and persistence live outside this crate; the
/// decision engine only needs lookup-by-username. Implementations must
/// return a consistent snapshot of the identity, so one decision never
/// observes a half-updated record.
pub trait IdentityStore {
    /// Find the identity registered under `username`, if any.
    fn lookup(&self, username: &str) -> Option<Identity>;
}

impl Identity {
    /// Create an enabled identity with no password configured.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            bound_client_id: None,
            disabled: false,
            credential: CredentialRecord::unset(),
        }
    }
}
