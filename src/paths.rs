//! Canonical URL paths and query strings for the state-manager API
//!
//! Pure string construction: empty identity fields pass through as empty
//! path segments and are left for the server to reject.

use crate::types::{GroupKind, ListOptions, PageCursor, ResourceKey};

/// Collection endpoint for cross-kind list queries.
pub(crate) const LIST_PATH: &str = "/api/v1/resources";

/// Canonical path of a single resource.
pub(crate) fn resource_path(gk: &GroupKind, key: &ResourceKey) -> String {
    format!(
        "/api/v1/groups/{}/namespaces/{}/kinds/{}/resources/{}",
        urlencoding::encode(&gk.group),
        urlencoding::encode(&key.namespace),
        urlencoding::encode(&gk.kind),
        urlencoding::encode(&key.name),
    )
}

/// Canonical path of a kind's collection within a namespace (create target).
pub(crate) fn collection_path(gk: &GroupKind, namespace: &str) -> String {
    format!(
        "/api/v1/groups/{}/namespaces/{}/kinds/{}/resources",
        urlencoding::encode(&gk.group),
        urlencoding::encode(namespace),
        urlencoding::encode(&gk.kind),
    )
}

/// Status sub-resource path.
pub(crate) fn status_path(gk: &GroupKind, key: &ResourceKey) -> String {
    let mut path = resource_path(gk, key);
    path.push_str("/status");
    path
}

/// Optional shard filter for single-resource operations.
pub(crate) fn shard_query(shard_id: Option<&str>) -> String {
    match shard_id {
        Some(shard) => format!("?shard_id={}", urlencoding::encode(shard)),
        None => String::new(),
    }
}

/// Query string for a list filter. Unset fields are omitted entirely; an
/// empty filter yields an empty string.
pub(crate) fn list_query(options: &ListOptions) -> String {
    let mut params = Vec::new();
    if let Some(ref group) = options.group {
        params.push(format!("resource_group={}", urlencoding::encode(group)));
    }
    if let Some(ref kind) = options.kind {
        params.push(format!("kind={}", urlencoding::encode(kind)));
    }
    if let Some(ref namespace) = options.namespace {
        params.push(format!("namespace={}", urlencoding::encode(namespace)));
    }
    if let Some(ref name) = options.name {
        params.push(format!("name={}", urlencoding::encode(name)));
    }
    if let Some(ref shard) = options.shard_id {
        params.push(format!("shard_id={}", urlencoding::encode(shard)));
    }
    if options.pending {
        params.push("pending=true".to_string());
    }
    join_params(params)
}

/// Query string for one page of a pending-work query.
pub(crate) fn pending_query(gk: &GroupKind, shard_id: &str, cursor: &PageCursor) -> String {
    let params = vec![
        "pending=true".to_string(),
        format!("resource_group={}", urlencoding::encode(&gk.group)),
        format!("kind={}", urlencoding::encode(&gk.kind)),
        format!("shard_id={}", urlencoding::encode(shard_id)),
        format!("limit={}", cursor.limit),
        format!("offset={}", cursor.offset),
    ];
    join_params(params)
}

fn join_params(params: Vec<String>) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}
