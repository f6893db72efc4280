//! Types for the state-manager client API

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Default user agent sent with every request.
pub const USER_AGENT: &str = "state-mgr-sdk/1.0";

/// Page size for pending-work queries.
pub(crate) const PENDING_PAGE_LIMIT: u32 = 100;

/// Client configuration
#[derive(Debug, Clone)]
pub struct StateManagerConfig {
    /// Base URL for the state-manager HTTP API
    pub base_url: String,
    /// User agent header value
    pub user_agent: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for StateManagerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Two-part type tag for a resource family (API group + kind)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupKind {
    pub group: String,
    pub kind: String,
}

impl GroupKind {
    pub fn new(group: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            kind: kind.into(),
        }
    }
}

/// Per-instance address of a resource within its group/kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceKey {
    pub namespace: String,
    pub name: String,
}

impl ResourceKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

/// Trait for resource types stored in the state manager.
///
/// The group/kind pair is fixed per type and reported by the type itself;
/// namespace and name vary per instance. `Clone` provides the structural
/// deep-copy used when callers mutate a fetched resource before an update.
pub trait ResourceObject: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The group/kind this type is stored under
    fn group_kind() -> GroupKind;

    /// The namespace/name of this instance
    fn key(&self) -> ResourceKey;
}

/// Filter for list operations.
///
/// Unset fields place no constraint on that dimension; an all-default filter
/// lists every resource visible to the caller.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter by API group
    pub group: Option<String>,
    /// Filter by kind
    pub kind: Option<String>,
    /// Filter by namespace
    pub namespace: Option<String>,
    /// Filter by name
    pub name: Option<String>,
    /// Filter by owning shard
    pub shard_id: Option<String>,
    /// Only resources awaiting reconciliation
    pub pending: bool,
}

/// Offset/limit cursor for pending-work pagination. Owned by the client,
/// never exposed to callers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageCursor {
    pub offset: u32,
    pub limit: u32,
}

impl PageCursor {
    pub fn new(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// Move to the next page
    pub fn advance(&mut self) {
        self.offset += self.limit;
    }

    /// Whether a page of `returned` rows was the last one
    pub fn is_last_page(&self, returned: usize) -> bool {
        (returned as u32) < self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = StateManagerConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.user_agent, USER_AGENT);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_cursor_advance() {
        let mut cursor = PageCursor::new(100);
        assert_eq!(cursor.offset, 0);
        cursor.advance();
        assert_eq!(cursor.offset, 100);
        cursor.advance();
        assert_eq!(cursor.offset, 200);
    }

    #[test]
    fn test_cursor_last_page() {
        let cursor = PageCursor::new(100);
        assert!(!cursor.is_last_page(100));
        assert!(cursor.is_last_page(99));
        assert!(cursor.is_last_page(0));
    }

    #[test]
    fn test_empty_filter_is_default() {
        let opts = ListOptions::default();
        assert!(opts.group.is_none());
        assert!(opts.shard_id.is_none());
        assert!(!opts.pending);
    }
}
