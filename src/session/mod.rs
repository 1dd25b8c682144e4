//! Session context for the authenticated user.
//!
//! The session is the only state shared across views. It resolves
//! synchronously from the injected storage backend at application start,
//! with an explicit `Resolving` state until that has happened.

pub mod storage;

pub use storage::{FileStorage, MemoryStorage, SessionStorage, TOKEN_KEY, USER_KEY};

use crate::error::Result;
use crate::models::{Role, User};

/// Resolution state of the session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Storage has not been read yet
    Resolving,
    /// No user is logged in
    Anonymous,
    /// A user is logged in
    Authenticated(User),
}

/// Session context holding the current user and bearer token
#[derive(Debug)]
pub struct Session<S: SessionStorage> {
    storage: S,
    state: SessionState,
    token: Option<String>,
}

impl<S: SessionStorage> Session<S> {
    /// Create a session over a storage backend. The session stays in the
    /// `Resolving` state until `init` is called.
    #[must_use]
    pub const fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::Resolving,
            token: None,
        }
    }

    /// Resolve the session from storage.
    ///
    /// A stored user that no longer parses is treated as anonymous. No
    /// expiry check is performed on the token.
    pub fn init(&mut self) -> Result<()> {
        let stored_user = self.storage.load(USER_KEY)?;
        let stored_token = self.storage.load(TOKEN_KEY)?;

        self.state = match stored_user {
            Some(raw) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => SessionState::Authenticated(user),
                Err(e) => {
                    log::warn!("Discarding unreadable stored user: {e}");
                    SessionState::Anonymous
                }
            },
            None => SessionState::Anonymous,
        };
        self.token = stored_token;

        if let SessionState::Authenticated(user) = &self.state {
            log::info!("Session resolved for {} ({})", user.name, user.role);
        }

        Ok(())
    }

    /// Persist a user and token and mark the session authenticated
    pub fn login(&mut self, user: User, token: impl Into<String>) -> Result<()> {
        let token = token.into();
        self.storage.store(USER_KEY, &serde_json::to_string(&user)?)?;
        self.storage.store(TOKEN_KEY, &token)?;

        log::info!("Logged in {} ({})", user.name, user.role);
        self.state = SessionState::Authenticated(user);
        self.token = Some(token);
        Ok(())
    }

    /// Clear both storage keys and mark the session anonymous
    pub fn logout(&mut self) -> Result<()> {
        self.storage.remove(USER_KEY)?;
        self.storage.remove(TOKEN_KEY)?;
        self.state = SessionState::Anonymous;
        self.token = None;
        Ok(())
    }

    /// Drop the in-memory session state without touching storage.
    ///
    /// The next `init` resolves from storage again.
    pub fn teardown(&mut self) {
        self.state = SessionState::Resolving;
        self.token = None;
    }

    /// Current resolution state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// The logged-in user, if any
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Role of the logged-in user, if any
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.current_user().map(|u| u.role)
    }

    /// The persisted bearer token, if any
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Whether a user is logged in
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated(_))
    }
}
