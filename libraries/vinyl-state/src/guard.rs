//! Navigation guard.
//!
//! Decides whether a view transition may proceed based solely on whether
//! the session is authenticated. It holds no state of its own.

use crate::session::SessionStore;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Who may enter a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    RequiresAuth,
    RequiresGuest,
}

/// Views known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Albums,
    NotFound,
}

impl Route {
    /// Resolve a path. `/` lands on the album listing; unknown paths are `NotFound`.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" | "/albums" => Route::Albums,
            "/login" => Route::Login,
            "/register" => Route::Register,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Albums => "/albums",
            Route::NotFound => "/404",
        }
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Route::Login | Route::Register => RouteAccess::RequiresGuest,
            Route::Albums => RouteAccess::RequiresAuth,
            Route::NotFound => RouteAccess::Public,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(Route),
}

/// Pure decision: where does `route` lead for this authentication state?
pub fn resolve(route: Route, authenticated: bool) -> Navigation {
    match (route.access(), authenticated) {
        (RouteAccess::RequiresAuth, false) => Navigation::Redirect(Route::Login),
        (RouteAccess::RequiresGuest, true) => Navigation::Redirect(Route::Albums),
        _ => Navigation::Proceed,
    }
}

/// Consults the session store's `is_authenticated` flag before each transition.
#[derive(Clone)]
pub struct NavigationGuard {
    session: Arc<SessionStore>,
}

impl NavigationGuard {
    pub fn new(session: Arc<SessionStore>) -> Self {
        Self { session }
    }

    pub async fn check(&self, route: Route) -> Navigation {
        let authenticated = self.session.is_authenticated().await;
        let outcome = resolve(route, authenticated);
        debug!(route = %route, authenticated, outcome = ?outcome, "Navigation checked");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paths() {
        assert_eq!(Route::parse("/"), Route::Albums);
        assert_eq!(Route::parse(""), Route::Albums);
        assert_eq!(Route::parse("/albums/"), Route::Albums);
        assert_eq!(Route::parse("/albums?page=2"), Route::Albums);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/register#top"), Route::Register);
        assert_eq!(Route::parse("/nope/deeper"), Route::NotFound);
    }

    #[test]
    fn test_guest_is_sent_to_login() {
        assert_eq!(
            resolve(Route::Albums, false),
            Navigation::Redirect(Route::Login)
        );
        assert_eq!(resolve(Route::Login, false), Navigation::Proceed);
        assert_eq!(resolve(Route::Register, false), Navigation::Proceed);
        assert_eq!(resolve(Route::NotFound, false), Navigation::Proceed);
    }

    #[test]
    fn test_member_is_kept_off_guest_pages() {
        assert_eq!(resolve(Route::Albums, true), Navigation::Proceed);
        assert_eq!(
            resolve(Route::Login, true),
            Navigation::Redirect(Route::Albums)
        );
        assert_eq!(
            resolve(Route::Register, true),
            Navigation::Redirect(Route::Albums)
        );
        assert_eq!(resolve(Route::NotFound, true), Navigation::Proceed);
    }
}
