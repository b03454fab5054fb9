//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::Serialize;

/// Outcome token identifier - newtype for type safety.
///
/// Polymarket calls this the position `asset`; Opinion calls it `tokenId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Create a new TokenId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the token ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if no identifier was supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TokenId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Market condition identifier - newtype for type safety.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ConditionId(String);

impl ConditionId {
    /// Create a new ConditionId from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the condition ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ConditionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for ConditionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Index of a curated match group within its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupId(usize);

impl GroupId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_id_new_and_as_str() {
        let id = TokenId::new("test-token");
        assert_eq!(id.as_str(), "test-token");
        assert!(!id.is_empty());
    }

    #[test]
    fn token_id_default_is_empty() {
        assert!(TokenId::default().is_empty());
    }

    #[test]
    fn condition_id_from_str() {
        let id = ConditionId::from("0xabc");
        assert_eq!(id.as_str(), "0xabc");
        assert_eq!(format!("{}", id), "0xabc");
    }

    #[test]
    fn group_id_display() {
        assert_eq!(GroupId::new(7).to_string(), "group-7");
        assert_eq!(GroupId::new(7).index(), 7);
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&TokenId::new("t-1")).unwrap();
        assert_eq!(json, r#""t-1""#);
        let json = serde_json::to_string(&GroupId::new(3)).unwrap();
        assert_eq!(json, "3");
    }
}
