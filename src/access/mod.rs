//! Role-gated route resolution.
//!
//! A route table maps hash-style paths to per-route role allow-lists.
//! Resolution never fails: unauthenticated requests redirect to login,
//! role mismatches to the unauthorized page, and unmatched paths home.

use crate::models::Role;
use crate::session::SessionState;

/// Path of the login page
pub const LOGIN_PATH: &str = "/login";
/// Path of the unauthorized page
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
/// Path of the home page
pub const HOME_PATH: &str = "/";

/// Outcome of resolving a path against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The user may visit the requested path
    Allow {
        /// The path that was requested
        path: String,
    },
    /// No user is logged in (or the session is still resolving)
    RedirectToLogin,
    /// The logged-in user's role is not on the route's allow-list
    RedirectToUnauthorized,
    /// The path matched no route
    RedirectToHome,
}

/// One gated route: a path prefix and the roles allowed under it.
/// An empty allow-list marks a public route.
#[derive(Debug, Clone)]
struct Route {
    prefix: &'static str,
    allowed: &'static [Role],
}

impl Route {
    /// Whether a request path falls under this route
    fn matches(&self, path: &str) -> bool {
        if self.prefix == HOME_PATH {
            return path == HOME_PATH;
        }
        path == self.prefix
            || path
                .strip_prefix(self.prefix)
                .is_some_and(|rest| rest.starts_with('/'))
    }

    const fn is_public(&self) -> bool {
        self.allowed.is_empty()
    }
}

/// Route table for the portal's role-specific page groups
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RouteTable {
    /// The portal's standard routing surface: one gated prefix per role
    /// plus the public login, unauthorized and home pages.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            routes: vec![
                Route {
                    prefix: LOGIN_PATH,
                    allowed: &[],
                },
                Route {
                    prefix: UNAUTHORIZED_PATH,
                    allowed: &[],
                },
                Route {
                    prefix: HOME_PATH,
                    allowed: &[],
                },
                Route {
                    prefix: "/patient",
                    allowed: &[Role::Patient],
                },
                Route {
                    prefix: "/doctor",
                    allowed: &[Role::Doctor],
                },
                Route {
                    prefix: "/lab",
                    allowed: &[Role::Lab],
                },
                Route {
                    prefix: "/admin",
                    allowed: &[Role::Admin],
                },
            ],
        }
    }

    /// Resolve a requested path for the current session state
    #[must_use]
    pub fn resolve(&self, path: &str, state: &SessionState) -> Navigation {
        let Some(route) = self.routes.iter().find(|r| r.matches(path)) else {
            log::debug!("No route matches {path}, redirecting home");
            return Navigation::RedirectToHome;
        };

        if route.is_public() {
            return Navigation::Allow {
                path: path.to_string(),
            };
        }

        match state {
            SessionState::Resolving | SessionState::Anonymous => Navigation::RedirectToLogin,
            SessionState::Authenticated(user) => {
                if route.allowed.contains(&user.role) {
                    Navigation::Allow {
                        path: path.to_string(),
                    }
                } else {
                    log::debug!(
                        "Role {} not allowed under {}, redirecting to {}",
                        user.role,
                        route.prefix,
                        UNAUTHORIZED_PATH
                    );
                    Navigation::RedirectToUnauthorized
                }
            }
        }
    }
}
