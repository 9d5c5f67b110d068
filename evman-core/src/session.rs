//! Roles and what each one may do.
//!
//! The store has no notion of roles; callers ask the session before
//! invoking a mutating operation.

use std::fmt;

use crate::config::AdminConfig;
use crate::error::{EvmanError, EvmanResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    View,
    Search,
    Timeline,
    Add,
    Delete,
    Edit,
}

impl Capability {
    pub const READ_ONLY: &'static [Capability] =
        &[Capability::View, Capability::Search, Capability::Timeline];

    pub const ALL: &'static [Capability] = &[
        Capability::View,
        Capability::Search,
        Capability::Timeline,
        Capability::Add,
        Capability::Delete,
        Capability::Edit,
    ];
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Capability::View => "view",
            Capability::Search => "search",
            Capability::Timeline => "timeline",
            Capability::Add => "add",
            Capability::Delete => "delete",
            Capability::Edit => "edit",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn capabilities(self) -> &'static [Capability] {
        match self {
            Role::Admin => Capability::ALL,
            Role::User => Capability::READ_ONLY,
        }
    }

    pub fn can(self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }
}

pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    role: Role,
}

impl Session {
    pub fn user() -> Self {
        Session { role: Role::User }
    }

    /// Start an admin session if `credentials` match the configured account.
    pub fn login(credentials: &Credentials, admin: Option<&AdminConfig>) -> EvmanResult<Self> {
        let admin = admin.ok_or_else(|| {
            EvmanError::AccessDenied("no admin account is configured".to_string())
        })?;

        if credentials.username == admin.username && credentials.password == admin.password {
            Ok(Session { role: Role::Admin })
        } else {
            Err(EvmanError::AccessDenied("invalid username or password".to_string()))
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn require(&self, capability: Capability) -> EvmanResult<()> {
        if self.role.can(capability) {
            Ok(())
        } else {
            Err(EvmanError::AccessDenied(format!(
                "{capability} requires an admin session"
            )))
        }
    }
}
