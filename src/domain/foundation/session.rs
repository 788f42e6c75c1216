//! Explicit authentication session context.
//!
//! The session is created at login and dropped at logout. It is handed to
//! whatever needs it rather than living in process-wide state, and the bearer
//! token is only exposed when the `Authorization` header value is built.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{UserId, ValidationError};

/// Workflow role of the signed-in account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Author,
    Expert,
    Editor,
}

impl Role {
    /// Route prefix of the role's workspace.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Author => "/author",
            Role::Expert => "/expert",
            Role::Editor => "/editor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Author => "author",
            Role::Expert => "expert",
            Role::Editor => "editor",
        };
        f.write_str(s)
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "author" => Ok(Role::Author),
            "expert" => Ok(Role::Expert),
            "editor" => Ok(Role::Editor),
            other => Err(ValidationError::invalid_format(
                "role",
                format!("unknown role '{}'", other),
            )),
        }
    }
}

/// Credentials of one signed-in account.
#[derive(Clone)]
pub struct AuthSession {
    token: SecretString,
    role: Role,
    user_id: UserId,
}

impl AuthSession {
    /// Creates a session, returning error if the token is blank.
    pub fn new(token: impl Into<String>, role: Role, user_id: UserId) -> Result<Self, ValidationError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ValidationError::empty_field("token"));
        }
        Ok(Self {
            token: SecretString::new(token),
            role,
            user_id,
        })
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> String {
        format!("Bearer {}", self.token.expose_secret())
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("token", &"[REDACTED]")
            .field("role", &self.role)
            .field("user_id", &self.user_id)
            .finish()
    }
}

/// Holder of the current session across the login/logout lifecycle.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current: Option<AuthSession>,
}

impl SessionContext {
    /// Creates an empty, signed-out context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces any existing session.
    pub fn login(&mut self, session: AuthSession) {
        self.current = Some(session);
    }

    /// Drops the session, returning it if one was active.
    pub fn logout(&mut self) -> Option<AuthSession> {
        self.current.take()
    }

    pub fn current(&self) -> Option<&AuthSession> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Returns true if signed in with the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.current.as_ref().is_some_and(|s| s.role == role)
    }

    pub fn bearer_header(&self) -> Option<String> {
        self.current.as_ref().map(AuthSession::bearer_header)
    }
}
