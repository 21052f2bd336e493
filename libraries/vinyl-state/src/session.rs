//! Session store: identity, credential token and their persistence.

use crate::status::OperationStatus;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use vinyl_client::{AuthGateway, ClientError, LoginRequest, RegisterRequest};
use vinyl_core::{AuthSession, FailureKind, KeyValueStore, User, TOKEN_KEY, USER_KEY};

const PROFILE_LOAD_FAILED: &str = "Failed to load user profile";

/// The current actor.
///
/// `identity` is only ever set while `credential_token` is set; both are
/// established and cleared together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<User>,
    credential_token: Option<String>,
    status: OperationStatus,
}

impl Session {
    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    pub fn credential_token(&self) -> Option<&str> {
        self.credential_token.as_deref()
    }

    /// Token presence is the sole source of truth for authentication.
    pub fn is_authenticated(&self) -> bool {
        self.credential_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(User::is_admin)
    }

    pub fn is_loading(&self) -> bool {
        self.status.is_loading()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.status.last_error()
    }

    pub fn last_error_kind(&self) -> Option<FailureKind> {
        self.status.last_error_kind()
    }

    fn establish(&mut self, auth: AuthSession) {
        self.credential_token = Some(auth.token);
        self.identity = Some(auth.user);
    }

    fn clear(&mut self) {
        self.credential_token = None;
        self.identity = None;
    }

    /// Rebuild a session from durable storage without any network call.
    ///
    /// A token with no stored identity is kept as-is. A stored identity that
    /// cannot be read back forces a local logout: both slots are removed and
    /// the session starts unauthenticated with an error message.
    fn restore_from(storage: &dyn KeyValueStore) -> Self {
        let mut session = Session::default();

        let token = match storage.get(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => token,
            Ok(_) => return session,
            Err(e) => {
                warn!(error = %e, "Failed to read stored credential token");
                return session;
            }
        };

        let identity = match storage.get(USER_KEY) {
            Ok(None) => {
                warn!("Stored token has no identity; continuing without a profile");
                None
            }
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(error = %e, "Stored identity is unreadable; forcing logout");
                    forget(storage);
                    session
                        .status
                        .record_error(FailureKind::Invalid, PROFILE_LOAD_FAILED);
                    return session;
                }
            },
            Err(e) => {
                warn!(error = %e, "Failed to read stored identity; forcing logout");
                forget(storage);
                session
                    .status
                    .record_error(FailureKind::Invalid, PROFILE_LOAD_FAILED);
                return session;
            }
        };

        debug!(
            user_id = ?identity.as_ref().map(|u| u.id),
            "Restored session from storage"
        );
        session.credential_token = Some(token);
        session.identity = identity;
        session
    }
}

/// Write both slots. Failures are logged; the in-memory session stands.
fn persist(storage: &dyn KeyValueStore, auth: &AuthSession) {
    if let Err(e) = storage.set(TOKEN_KEY, &auth.token) {
        warn!(error = %e, "Failed to persist credential token");
    }
    match serde_json::to_string(&auth.user) {
        Ok(raw) => {
            if let Err(e) = storage.set(USER_KEY, &raw) {
                warn!(error = %e, "Failed to persist identity");
            }
        }
        Err(e) => warn!(error = %e, "Failed to serialize identity"),
    }
}

/// Remove both slots. Failures are logged.
fn forget(storage: &dyn KeyValueStore) {
    for key in [TOKEN_KEY, USER_KEY] {
        if let Err(e) = storage.remove(key) {
            warn!(error = %e, key, "Failed to clear stored session slot");
        }
    }
}

/// Owns the `Session` and mediates every identity call.
///
/// Operations take `&self` and may overlap; each resolves independently and
/// the last one to finish decides `last_error`. No operation returns an
/// error: failures land in `last_error`/`last_error_kind` and the call
/// reports `false`.
pub struct SessionStore {
    gateway: Arc<dyn AuthGateway>,
    storage: Arc<dyn KeyValueStore>,
    state: RwLock<Session>,
}

impl SessionStore {
    /// Create the store, rehydrating any session persisted by a previous run.
    pub fn new(gateway: Arc<dyn AuthGateway>, storage: Arc<dyn KeyValueStore>) -> Self {
        let session = Session::restore_from(storage.as_ref());
        if session.is_authenticated() {
            info!("Session restored from storage");
        }

        Self {
            gateway,
            storage,
            state: RwLock::new(session),
        }
    }

    /// Clone of the whole session.
    pub async fn snapshot(&self) -> Session {
        self.state.read().await.clone()
    }

    pub async fn identity(&self) -> Option<User> {
        self.state.read().await.identity.clone()
    }

    pub async fn credential_token(&self) -> Option<String> {
        self.state.read().await.credential_token.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    pub async fn is_admin(&self) -> bool {
        self.state.read().await.is_admin()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.read().await.is_loading()
    }

    pub async fn last_error(&self) -> Option<String> {
        self.state.read().await.last_error().map(str::to_string)
    }

    pub async fn last_error_kind(&self) -> Option<FailureKind> {
        self.state.read().await.last_error_kind()
    }

    /// Login with email and password.
    ///
    /// Returns `true` once token and identity are set and persisted.
    pub async fn login(&self, email: &str, password: &str) -> bool {
        if email.trim().is_empty() || password.is_empty() {
            self.reject_locally("Email and password are required")
                .await;
            return false;
        }

        self.state.write().await.status.begin();
        let result = self
            .gateway
            .login(LoginRequest::new(email, password))
            .await;
        self.complete_authentication(result, "Login").await
    }

    /// Create an account; success logs the new account in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> bool {
        if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
            self.reject_locally("Name, email and password are required")
                .await;
            return false;
        }

        self.state.write().await.status.begin();
        let result = self
            .gateway
            .register(RegisterRequest::new(name, email, password))
            .await;
        self.complete_authentication(result, "Registration").await
    }

    /// End the session.
    ///
    /// The remote call is attempted when a token is held, but its outcome
    /// never prevents the local session from being cleared. Always `true`.
    pub async fn logout(&self) -> bool {
        let token = {
            let mut state = self.state.write().await;
            state.status.begin();
            state.credential_token.clone()
        };

        if let Some(token) = token {
            if let Err(e) = self.gateway.logout(token).await {
                warn!(error = %e, "Remote logout failed; clearing local session anyway");
            }
        }

        {
            let mut state = self.state.write().await;
            state.clear();
            state.status.succeed();
        }
        forget(self.storage.as_ref());

        info!("Logged out");
        true
    }

    /// Re-read the persisted session, replacing the in-memory one.
    ///
    /// Runs automatically at construction; no network round trip, and the
    /// token is not re-validated against the server.
    pub async fn restore_session(&self) -> bool {
        let restored = Session::restore_from(self.storage.as_ref());
        let authenticated = restored.is_authenticated();

        let mut state = self.state.write().await;
        state.credential_token = restored.credential_token;
        state.identity = restored.identity;
        match restored.status.last_error_kind() {
            Some(kind) => state
                .status
                .record_error(kind, restored.status.last_error().unwrap_or_default()),
            None => state.status.clear_error(),
        }

        authenticated
    }

    /// Drop all in-memory state without touching durable storage.
    pub async fn reset(&self) {
        *self.state.write().await = Session::default();
    }

    async fn reject_locally(&self, message: &str) {
        debug!(reason = message, "Rejected session operation before sending");
        self.state
            .write()
            .await
            .status
            .record_error(FailureKind::Invalid, message);
    }

    async fn complete_authentication(
        &self,
        result: Result<AuthSession, ClientError>,
        action: &str,
    ) -> bool {
        match result {
            Ok(auth) => {
                let user_id = auth.user.id;
                {
                    let mut state = self.state.write().await;
                    state.establish(auth.clone());
                    state.status.succeed();
                }
                persist(self.storage.as_ref(), &auth);

                info!(user_id, "{} succeeded", action);
                true
            }
            Err(e) => {
                warn!(error = %e, "{} failed", action);
                self.state
                    .write()
                    .await
                    .status
                    .fail(e.kind(), e.to_string());
                false
            }
        }
    }
}
