//! Lookup keys.
//!
//! Every cross-entity reference is one of these keys. They are plain string
//! newtypes so a network provider can carry server-issued identifiers
//! unchanged.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

macro_rules! string_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap a raw key.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// Raw key as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self::new(raw)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_key! {
    /// User handle, without the leading `@`.
    Handle
}

string_key! {
    /// Post identifier.
    PostId
}

string_key! {
    /// Conversation identifier.
    ConversationId
}

string_key! {
    /// Direct message identifier.
    MessageId
}

string_key! {
    /// Notification identifier.
    NotificationId
}

string_key! {
    /// Comment identifier.
    CommentId
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn display_is_raw_key() {
        assert_eq!(Handle::from("alice").to_string(), "alice");
        assert_eq!(ConversationId::new(String::from("c1")).as_str(), "c1");
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(PostId::from("1"), 42);

        assert_eq!(map.get("1"), Some(&42));
        assert_eq!(map.get("2"), None);
    }
}
