//! Session provider: the only place that writes the session.

use contracts::system::access::AuthStatus;
use contracts::system::auth::LoginResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use super::session::{Session, SessionError, SessionState, SessionStore};
use super::storage::LocalStorage;
use crate::shared::api_utils::ApiClient;

/// Handle to the session. Readers subscribe to [`AuthContext::state`];
/// changes go through [`AuthContext::login`] and [`AuthContext::logout`].
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<SessionState>,
    store: StoredValue<SessionStore<LocalStorage>>,
}

impl AuthContext {
    pub fn state(&self) -> Signal<SessionState> {
        self.state.read_only().into()
    }

    pub fn status(&self) -> Signal<AuthStatus> {
        let state = self.state;
        Signal::derive(move || state.with(SessionState::auth_status))
    }

    pub fn session(&self) -> Option<Session> {
        self.state.with(|s| s.session().cloned())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(SessionState::is_loading)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    /// REST client carrying the current token
    pub fn client(&self) -> ApiClient {
        self.state
            .with_untracked(|s| s.session().map(|session| ApiClient::with_token(&session.token)))
            .unwrap_or_default()
    }

    pub fn login(&self, response: LoginResponse) -> Result<(), SessionError> {
        let result = self
            .store
            .try_update_value(|store| store.login(response))
            .unwrap_or(Ok(()));
        self.sync();
        result
    }

    pub fn logout(&self) {
        self.store.update_value(|store| store.logout());
        self.sync();
    }

    /// Sign out if `token` is still the session's token
    fn invalidate(&self, token: &str) {
        let ended = self
            .store
            .try_update_value(|store| store.invalidate(token))
            .unwrap_or(false);
        if ended {
            self.sync();
        }
    }

    fn sync(&self) {
        let state = self.store.with_value(|store| store.state().clone());
        self.state.set(state);
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let mut store = SessionStore::new(LocalStorage);
    store.restore();
    let restored_token = store.session().map(|s| s.token.clone());

    let auth = AuthContext {
        state: RwSignal::new(store.state().clone()),
        store: StoredValue::new(store),
    };
    provide_context(auth);

    // The identity collaborator has the last word on a restored token
    if let Some(token) = restored_token {
        spawn_local(async move {
            match api::get_current_user(&token).await {
                Ok(user) => log::debug!("Session of '{}' confirmed", user.name),
                Err(e) if e.is_unauthorized() => {
                    log::warn!("Stored session rejected by the server, signing out");
                    auth.invalidate(&token);
                }
                Err(e) => log::warn!("Could not verify session, keeping it: {}", e),
            }
        });
    }

    children()
}

/// Hook to access the session
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthProvider not found in component tree")
}
