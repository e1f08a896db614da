use tracing::info;

use crate::store::AuthState;

pub const DEFAULT_LOGIN_ROUTE: &str = "/auth/login";

/// Outcome of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Proceed(String),
    Redirect(String),
}

/// Sends visitors without a token to the login page.
///
/// Only presence of the token is checked; an expired token is let through and
/// rejected later by the API.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_route: String,
}

impl RouteGuard {
    pub fn new(login_route: impl Into<String>) -> Self {
        Self {
            login_route: login_route.into(),
        }
    }

    pub fn login_route(&self) -> &str {
        &self.login_route
    }

    pub fn check(&self, auth: &AuthState, target: &str) -> Navigation {
        if auth.has_token() {
            Navigation::Proceed(target.to_string())
        } else {
            info!("Navigation to {} redirected to {}", target, self.login_route);
            Navigation::Redirect(self.login_route.clone())
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(DEFAULT_LOGIN_ROUTE)
    }
}
