//! Authenticated user and role model
//!
//! This module contains the User model returned by the auth endpoints and
//! persisted in session storage between application starts.

use serde::{Deserialize, Serialize};

/// Role of an authenticated portal user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A patient viewing their own records
    Patient,
    /// A doctor viewing records of treated patients
    Doctor,
    /// Lab staff managing reports and test results
    Lab,
    /// A portal administrator
    Admin,
}

impl Role {
    /// Display label for the role
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Patient => "patient",
            Self::Doctor => "doctor",
            Self::Lab => "lab",
            Self::Admin => "admin",
        }
    }
}

impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "doctor" => Self::Doctor,
            "lab" => Self::Lab,
            "admin" => Self::Admin,
            _ => Self::Patient,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An authenticated portal user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub user_id: i64,
    /// Display name
    pub name: String,
    /// Role driving route access
    pub role: Role,
    /// Contact email, when the backend provides one
    #[serde(default)]
    pub email: Option<String>,
}

impl User {
    /// Create a user with the minimum required fields
    #[must_use]
    pub fn new(user_id: i64, name: impl Into<String>, role: Role) -> Self {
        Self {
            user_id,
            name: name.into(),
            role,
            email: None,
        }
    }
}
