//! Core identifier types with smart constructors.
//!
//! String-backed identifiers validate non-empty input at construction
//! time. Raw constructors are never exported - use smart constructors only.

use std::fmt;

/// Stable identifier of a single message item.
///
/// Assigned by the storage layer below this crate; stable for the lifetime
/// of the item and unique within a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(i64);

impl ItemId {
    /// Wrap a raw storage-layer id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// Identifier of an open conversation.
/// NEVER export the constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationId(String);

impl ConversationId {
    /// Smart constructor: validates non-empty conversation ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidConversationId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidConversationId::Empty);
        }
        Ok(Self(raw))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sender-identity key of a group-received item, used for avatar grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberId(String);

impl MemberId {
    /// Smart constructor: validates non-empty member ID
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidMemberId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidMemberId::Empty);
        }
        Ok(Self(raw))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ===== Error Types =====

/// Rejection of an empty conversation identifier.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidConversationId {
    /// The supplied identifier was the empty string.
    #[error("Conversation ID cannot be empty")]
    Empty,
}

/// Rejection of an empty member identifier.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidMemberId {
    /// The supplied identifier was the empty string.
    #[error("Member ID cannot be empty")]
    Empty,
}

// ===== Tests =====
