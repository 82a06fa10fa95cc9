use crate::compare::constant_time_eq;
use crate::identity::IdentityStore;
use crate::password::PasswordHasher;

/// Outcome of one verification attempt.
///
/// Every attempt terminates in exactly one of these; the engine never
/// returns an error to its caller, so the information available to an
/// attacker is uniform regardless of the internal failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The supplied password is correct for a known, enabled identity.
    Accept,
    /// The attempt is refused.
    Reject,
    /// This mechanism has no opinion; other configured auth mechanisms
    /// evaluate the attempt.
    Defer,
}

/// One verification attempt as handed over by the broker's auth chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthRequest<'a> {
    pub username: Option<&'a str>,
    pub password: Option<&'a str>,
    /// Client id presented by the connecting session, if any.
    pub client_id: Option<&'a str>,
    /// Remote address of the connecting session, passed through to the
    /// success notifier.
    pub address: Option<&'a str>,
}

/// Hook invoked after a successful verification.
///
/// Fire-and-forget: any error it raises is logged by the engine and never
/// changes or re-evaluates the Accept outcome. Implementations live
/// outside this crate (scripting bridges, audit sinks, and the like).
pub trait SuccessNotifier {
    /// Called once per Accept with the connecting client id and address;
    /// either may be empty when the session did not present one.
    fn connected(&self, client_id: &str, address: &str) -> anyhow::Result<()>;
}

/// Password verification engine for a pluggable broker auth chain.
///
/// Coordinates identity lookup, policy checks, hash derivation, and
/// constant-time comparison into a single three-way decision.
pub struct Authenticator<S> {
    store: S,
    hasher: PasswordHasher,
    notifier: Option<Box<dyn SuccessNotifier>>,
}

impl<S: IdentityStore> Authenticator<S> {
    /// Create an engine over an identity store, with no success notifier.
    pub fn new(store: S) -> Self {
        Self {
            store,
            hasher: PasswordHasher::new(),
            notifier: None,
        }
    }

    /// Attach a success notifier, consuming and returning the engine.
    pub fn with_notifier(mut self, notifier: Box<dyn SuccessNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Evaluate one verification attempt.
    ///
    /// Transitions are checked in order, first match wins:
    /// 1. Username or password absent: [`Outcome::Defer`].
    /// 2. Username unknown to the store: [`Outcome::Defer`].
    /// 3. Identity disabled: [`Outcome::Reject`].
    /// 4. Identity bound to a client id that the connecting session does
    ///    not present exactly (including presenting none): [`Outcome::Reject`].
    /// 5. Password configured: derive and compare in constant time.
    ///    Match: [`Outcome::Accept`]. Mismatch: [`Outcome::Reject`].
    ///    A derivation failure also yields [`Outcome::Reject`] (fail
    ///    closed); the underlying error is logged, never returned.
    /// 6. No password configured: [`Outcome::Defer`].
    pub fn check(&self, request: &AuthRequest) -> Outcome {
        let (Some(username), Some(password)) = (request.username, request.password) else {
            return Outcome::Defer;
        };

        let Some(identity) = self.store.lookup(username) else {
            return Outcome::Defer;
        };

        if identity.disabled {
            return Outcome::Reject;
        }

        if let Some(bound) = identity.bound_client_id.as_deref() {
            if request.client_id != Some(bound) {
                return Outcome::Reject;
            }
        }

        if !identity.credential.valid {
            return Outcome::Defer;
        }

        let derived = match self.hasher.derive(password, &identity.credential) {
            Ok(derived) => derived,
            Err(e) => {
                tracing::warn!("Password derivation failed for {}: {}", username, e);
                return Outcome::Reject;
            }
        };

        if !constant_time_eq(&derived, &identity.credential.hash) {
            return Outcome::Reject;
        }

        if let Some(notifier) = &self.notifier {
            let client_id = request.client_id.unwrap_or_default();
            let address = request.address.unwrap_or_default();
            if let Err(e) = notifier.connected(client_id, address) {
                tracing::warn!("Success notifier failed: {}", e);
            }
        }

        Outcome::Accept
    }
}
