//! Session store: the identity of the signed-in user and its persisted copy.

use contracts::enums::role::Role;
use contracts::system::access::AuthStatus;
use contracts::system::auth::LoginResponse;
use serde::{Deserialize, Serialize};

use super::storage::SessionStorage;

/// localStorage key of the persisted session record
pub const SESSION_KEY: &str = "garage_user";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("session has an empty {0}")]
    Incomplete(&'static str),
    #[error("session record is not valid: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Session {
    pub fn from_login(response: LoginResponse) -> Result<Self, SessionError> {
        let session = Self {
            id: response.user.id,
            name: response.user.name,
            role: response.user.role,
            token: response.access_token,
        };
        session.validate()?;
        Ok(session)
    }

    fn decode(raw: &str) -> Result<Self, SessionError> {
        let session: Session = serde_json::from_str(raw)?;
        session.validate()?;
        Ok(session)
    }

    fn validate(&self) -> Result<(), SessionError> {
        if self.id.trim().is_empty() {
            return Err(SessionError::Incomplete("id"));
        }
        if self.name.trim().is_empty() {
            return Err(SessionError::Incomplete("name"));
        }
        if self.token.trim().is_empty() {
            return Err(SessionError::Incomplete("token"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The persisted record has not been read yet
    Unresolved,
    Resolved(Option<Session>),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Resolved(Some(session)) => Some(session),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Unresolved)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    pub fn auth_status(&self) -> AuthStatus {
        match self {
            SessionState::Unresolved => AuthStatus::Unresolved,
            SessionState::Resolved(None) => AuthStatus::Anonymous,
            SessionState::Resolved(Some(session)) => AuthStatus::Authenticated(session.role),
        }
    }
}

/// Owns the session state and keeps the persisted record in step with it.
pub struct SessionStore<S> {
    storage: S,
    state: SessionState,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::Unresolved,
        }
    }

    /// Read the persisted record. Only the first call has an effect.
    ///
    /// A record that cannot be decoded counts as no session and is removed.
    pub fn restore(&mut self) -> &SessionState {
        if !self.state.is_loading() {
            return &self.state;
        }

        let session = self
            .storage
            .read(SESSION_KEY)
            .and_then(|raw| match Session::decode(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    log::warn!("Discarding stored session: {}", e);
                    self.storage.remove(SESSION_KEY);
                    None
                }
            });

        self.state = SessionState::Resolved(session);
        &self.state
    }

    /// Replace the session with the identity returned by a successful login.
    pub fn login(&mut self, response: LoginResponse) -> Result<(), SessionError> {
        let session = Session::from_login(response)?;
        let raw = serde_json::to_string(&session)?;
        if let Err(e) = self.storage.write(SESSION_KEY, &raw) {
            // still signed in, but only until the page is reloaded
            log::warn!("Session not persisted: {}", e);
        }
        self.state = SessionState::Resolved(Some(session));
        Ok(())
    }

    pub fn logout(&mut self) {
        self.storage.remove(SESSION_KEY);
        self.state = SessionState::Resolved(None);
    }

    /// End the session if `token` is still its token. An answer that
    /// arrives for an older token leaves a newer session alone.
    pub fn invalidate(&mut self, token: &str) -> bool {
        let current = self.session().is_some_and(|s| s.token == token);
        if current {
            self.logout();
        }
        current
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }

    pub fn auth_status(&self) -> AuthStatus {
        self.state.auth_status()
    }
}
