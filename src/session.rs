use crate::booking_flow::routes::Route;
use crate::http_handler::common::{Role, UserProfile};
use crate::http_handler::http_client::HTTPClient;
use crate::http_handler::http_request::{
    login_post::LoginRequest,
    profile_get::ProfileRequest,
    register_post::RegisterRequest,
    request_common::{JSONBodyHTTPRequestType, NoBodyHTTPRequestType},
};
use crate::http_handler::http_response::auth::AuthResponse;
use crate::http_handler::http_response::response_common::ResponseError;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::persist::token_store::TokenStore;

/// The slice of the account the client keeps around while authenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    name: String,
    email: String,
    role: Role,
}

impl SessionUser {
    pub fn name(&self) -> &str { &self.name }
    pub fn email(&self) -> &str { &self.email }
    pub fn role(&self) -> Role { self.role }
    pub fn is_admin(&self) -> bool { self.role == Role::Admin }

    fn from_profile(profile: &UserProfile) -> Self {
        Self {
            name: String::from(profile.name()),
            email: String::from(profile.email()),
            role: profile.role(),
        }
    }

    fn from_auth(auth: &AuthResponse) -> Self {
        Self {
            name: String::from(auth.name()),
            email: String::from(auth.email()),
            role: auth.role(),
        }
    }
}

/// Authentication state. The token and the user it belongs to live in the
/// same variant, so one cannot be present without the other.
#[derive(Debug, Clone)]
pub enum SessionState {
    Anonymous,
    Authenticated { token: String, user: SessionUser },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Anonymous => None,
            SessionState::Authenticated { user, .. } => Some(user),
        }
    }
}

/// Owner of the session state machine.
///
/// Every transition takes the write lock for its full duration, including
/// the network round trip, so overlapping login attempts serialize instead
/// of racing on whichever response lands last.
pub struct Session {
    client: Arc<HTTPClient>,
    store: TokenStore,
    state: RwLock<SessionState>,
}

impl Session {
    pub fn new(client: Arc<HTTPClient>, store: TokenStore) -> Self {
        Self { client, store, state: RwLock::new(SessionState::Anonymous) }
    }

    /// Snapshot of the current state.
    pub async fn current(&self) -> SessionState { self.state.read().await.clone() }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// App-start transition: resolve a persisted token into a profile.
    ///
    /// Without a stored token no request goes out. A stored token that the
    /// profile endpoint rejects (for any reason) is discarded from storage
    /// and the session stays anonymous.
    pub async fn resolve(&self) -> SessionState {
        let mut state = self.state.write().await;
        let Some(token) = self.store.load().await else {
            self.client.clear_bearer_token().await;
            *state = SessionState::Anonymous;
            return state.clone();
        };
        self.client.set_bearer_token(&token).await;
        match (ProfileRequest {}).send_request(&self.client).await {
            Ok(profile) => {
                crate::event!("Resumed session for {}", profile.email());
                *state = SessionState::Authenticated {
                    token,
                    user: SessionUser::from_profile(&profile),
                };
            }
            Err(e) => {
                crate::warn!("Discarding stored token: {}", e.user_message());
                if let Err(io_err) = self.store.discard().await {
                    crate::warn!("Could not remove stored token: {io_err}");
                }
                self.client.clear_bearer_token().await;
                *state = SessionState::Anonymous;
            }
        }
        state.clone()
    }

    /// Login transition. On success the token is persisted, the client is
    /// authenticated and the role-dependent landing route is returned. On
    /// failure the previous state is left untouched.
    pub async fn login(&self, email: &str, password: &str) -> Result<Route, ResponseError> {
        let mut state = self.state.write().await;
        let response = LoginRequest {
            email: String::from(email),
            password: String::from(password),
        }
        .send_request(&self.client)
        .await?;
        self.install(&mut state, &response).await;
        Ok(Route::landing_for_role(response.role()))
    }

    /// Registration transition; lands on the standard-user dashboard.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        phone: Option<&str>,
    ) -> Result<Route, ResponseError> {
        let mut state = self.state.write().await;
        let response = RegisterRequest {
            name: String::from(name),
            email: String::from(email),
            password: String::from(password),
            phone: phone.map(String::from),
        }
        .send_request(&self.client)
        .await?;
        self.install(&mut state, &response).await;
        Ok(Route::UserDashboard)
    }

    /// Logout transition: token and user are dropped together.
    pub async fn logout(&self) -> Route {
        let mut state = self.state.write().await;
        if let Err(e) = self.store.discard().await {
            crate::warn!("Could not remove stored token: {e}");
        }
        self.client.clear_bearer_token().await;
        *state = SessionState::Anonymous;
        crate::event!("Session closed");
        Route::Landing
    }

    async fn install(&self, state: &mut SessionState, response: &AuthResponse) {
        if let Err(e) = self.store.save(response.token()).await {
            crate::warn!("Session token could not be persisted: {e}");
        }
        self.client.set_bearer_token(response.token()).await;
        *state = SessionState::Authenticated {
            token: String::from(response.token()),
            user: SessionUser::from_auth(response),
        };
        crate::event!("Session opened for {}", response.email());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_against_unreachable(dir: &std::path::Path) -> Session {
        // Port 1 is never serviced; any request fails with a connect error.
        let client = Arc::new(HTTPClient::new("http://127.0.0.1:1/api"));
        Session::new(client, TokenStore::new(dir))
    }

    #[tokio::test]
    async fn resolve_without_token_stays_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_against_unreachable(dir.path());
        let state = session.resolve().await;
        assert!(!state.is_authenticated());
        assert!(state.user().is_none());
    }

    #[tokio::test]
    async fn resolve_with_rejected_token_discards_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::new(dir.path());
        store.save("expired-token").await.unwrap();

        let session = session_against_unreachable(dir.path());
        let state = session.resolve().await;
        assert!(!state.is_authenticated());
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn failed_login_leaves_session_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_against_unreachable(dir.path());
        let result = session.login("user@example.com", "password123").await;
        assert!(result.is_err());
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn logout_returns_to_the_landing_route() {
        let dir = tempfile::tempdir().unwrap();
        let session = session_against_unreachable(dir.path());
        assert_eq!(session.logout().await, Route::Landing);
        assert!(!session.is_authenticated().await);
    }
}
