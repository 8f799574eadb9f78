//! Facade error type.

use std::fmt;

use thiserror::Error;

/// Kind of record a lookup key refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entity {
    /// A [`crate::User`], keyed by handle.
    User,
    /// A [`crate::Post`].
    Post,
    /// A [`crate::Conversation`].
    Conversation,
    /// A [`crate::Notification`].
    Notification,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Post => "post",
            Self::Conversation => "conversation",
            Self::Notification => "notification",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`crate::SocialApi`] operations.
///
/// Only lookups can fail. Every other operation succeeds for well-typed
/// arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Lookup key has no matching record
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Table the lookup went to
        entity: Entity,
        /// Key that was looked up
        id: String,
    },
}

impl ApiError {
    /// `NotFound` for `id` in the `entity` table.
    pub fn not_found(entity: Entity, id: impl fmt::Display) -> Self {
        Self::NotFound { entity, id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_table_and_key() {
        let err = ApiError::not_found(Entity::Conversation, "c99");
        assert_eq!(err.to_string(), "conversation not found: c99");
    }
}
