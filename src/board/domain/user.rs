//! User records referenced as creators and assignees.

use super::{DomainError, UserId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user known to the board. Immutable after creation in this scope:
/// no edit operation exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl User {
    /// Creates a user with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyUserName`] when the display name is
    /// empty after trimming.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyUserName);
        }
        Ok(Self {
            id: UserId::new(),
            name,
            email: email.into(),
            avatar: None,
        })
    }

    /// Sets an avatar reference.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Returns the fixed demo user that seeds a fresh document.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            id: Self::demo_id(),
            name: "Demo User".to_owned(),
            email: "demo@example.com".to_owned(),
            avatar: None,
        }
    }

    /// Returns the well-known identifier of the demo user.
    #[must_use]
    pub const fn demo_id() -> UserId {
        UserId::from_uuid(Uuid::from_u128(1))
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the avatar reference, if any.
    #[must_use]
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}
