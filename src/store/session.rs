use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::models::User;

#[derive(Debug, Default)]
struct Session {
    token: Option<String>,
    user: Option<User>,
    logged_in: bool,
}

/// Read side of the auth session. Clone freely.
#[derive(Debug, Clone)]
pub struct AuthState {
    inner: Arc<RwLock<Session>>,
}

/// The only handle that can change the session. Handed to the login/logout flow.
#[derive(Debug)]
pub struct AuthWriter {
    inner: Arc<RwLock<Session>>,
}

impl AuthState {
    pub fn new() -> (AuthState, AuthWriter) {
        let inner = Arc::new(RwLock::new(Session::default()));
        (
            AuthState { inner: inner.clone() },
            AuthWriter { inner },
        )
    }

    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    pub fn has_token(&self) -> bool {
        self.inner.read().token.is_some()
    }

    pub fn user(&self) -> Option<User> {
        self.inner.read().user.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.read().logged_in
    }

    /// Header value for outbound requests. An absent token is sent as the literal `null`.
    pub fn bearer(&self) -> String {
        match self.inner.read().token.as_deref() {
            Some(token) => format!("Bearer {}", token),
            None => "Bearer null".to_string(),
        }
    }
}

impl AuthWriter {
    pub fn sign_in(&self, token: impl Into<String>, user: Option<User>) {
        let mut session = self.inner.write();
        session.token = Some(token.into());
        if let Some(u) = &user {
            info!("🔐 Signed in as {}", u.username);
        }
        session.user = user;
        session.logged_in = true;
    }

    pub fn sign_out(&self) {
        let mut session = self.inner.write();
        *session = Session::default();
        info!("🔐 Signed out");
    }
}
