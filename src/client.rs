//! HTTP client for the state-manager resource API

use crate::error::{Error, Result};
use crate::paths;
use crate::response;
use crate::types::{
    ListOptions, PageCursor, ResourceKey, ResourceObject, StateManagerConfig, PENDING_PAGE_LIMIT,
};
use reqwest::{header, Client, Method, StatusCode};
use serde::Serialize;
use std::marker::PhantomData;
use std::time::Duration;
use tracing::debug;

/// Typed client for one resource family in the state manager.
///
/// Stateless after construction and safe to share across tasks: every
/// operation is an independent request/response round trip on the shared
/// `reqwest` client, which owns connection reuse. Dropping an in-flight
/// future cancels the underlying request.
///
/// # Example
///
/// ```rust,no_run
/// use serde::{Deserialize, Serialize};
/// use state_manager_client::{
///     GroupKind, ResourceKey, ResourceObject, StateManagerConfig, StateManagerProvider,
/// };
///
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// struct Instance {
///     namespace: String,
///     name: String,
/// }
///
/// impl ResourceObject for Instance {
///     fn group_kind() -> GroupKind {
///         GroupKind::new("compute", "instance")
///     }
///     fn key(&self) -> ResourceKey {
///         ResourceKey::new(&self.namespace, &self.name)
///     }
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = StateManagerProvider::<Instance>::new(StateManagerConfig {
///     base_url: "http://localhost:8080".into(),
///     ..Default::default()
/// });
///
/// if let Some(instance) = provider.get(None, &ResourceKey::new("prod", "vm-1")).await? {
///     println!("found {}", instance.name);
/// }
///
/// let backlog = provider.list_pending("shard-a").await?;
/// println!("{} pending", backlog.len());
/// # Ok(())
/// # }
/// ```
pub struct StateManagerProvider<T> {
    client: Client,
    base_url: String,
    _resource: PhantomData<T>,
}

impl<T: ResourceObject> StateManagerProvider<T> {
    /// Create a new provider for the configured endpoint.
    pub fn new(config: StateManagerConfig) -> Self {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_str(&config.user_agent).expect("Invalid user agent"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            _resource: PhantomData,
        }
    }

    // ==================== Operations ====================

    /// Fetch a single resource.
    ///
    /// Returns `Ok(None)` when the resource does not exist; any other
    /// failure propagates as an error.
    pub async fn get(&self, shard_id: Option<&str>, key: &ResourceKey) -> Result<Option<T>> {
        let gk = T::group_kind();
        debug!(
            group = %gk.group,
            kind = %gk.kind,
            namespace = %key.namespace,
            name = %key.name,
            "get resource"
        );
        let rel = format!(
            "{}{}",
            paths::resource_path(&gk, key),
            paths::shard_query(shard_id)
        );

        let (status, raw) = self.execute::<()>(Method::GET, &rel, None).await?;
        match response::decode_body(status, &raw) {
            Ok(resource) => Ok(Some(resource)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// List resources matching a filter. Unset filter fields place no
    /// constraint; the default filter lists everything visible.
    pub async fn list(&self, options: &ListOptions) -> Result<Vec<T>> {
        let rel = format!("{}{}", paths::LIST_PATH, paths::list_query(options));
        let (status, raw) = self.execute::<()>(Method::GET, &rel, None).await?;
        response::decode_body(status, &raw)
    }

    /// Fetch the full pending-work backlog for a shard.
    ///
    /// Pages through the collection 100 rows at a time until a short page,
    /// returning the concatenation in server order. A failed page aborts the
    /// whole call with the offending offset; no partial result is returned.
    pub async fn list_pending(&self, shard_id: &str) -> Result<Vec<T>> {
        let gk = T::group_kind();
        let mut cursor = PageCursor::new(PENDING_PAGE_LIMIT);
        let mut all = Vec::new();

        loop {
            let rel = format!(
                "{}{}",
                paths::LIST_PATH,
                paths::pending_query(&gk, shard_id, &cursor)
            );
            let page: Vec<T> = match self.fetch_page(&rel).await {
                Ok(page) => page,
                Err(source) => {
                    return Err(Error::Pagination {
                        offset: cursor.offset,
                        source: Box::new(source),
                    })
                }
            };

            let returned = page.len();
            all.extend(page);
            if cursor.is_last_page(returned) {
                break;
            }
            cursor.advance();
        }

        debug!(
            group = %gk.group,
            kind = %gk.kind,
            shard_id,
            count = all.len(),
            "pending backlog fetched"
        );
        Ok(all)
    }

    /// Create a resource. Returns the server's echo, including any
    /// server-assigned fields such as creation timestamps.
    pub async fn create(&self, resource: &T) -> Result<T> {
        let gk = T::group_kind();
        let key = resource.key();
        debug!(group = %gk.group, kind = %gk.kind, name = %key.name, "create resource");
        let rel = paths::collection_path(&gk, &key.namespace);

        let (status, raw) = self.execute(Method::POST, &rel, Some(resource)).await?;
        response::decode_body(status, &raw)
    }

    /// Replace a resource with a full body. The resource's identity fields
    /// address the instance being replaced.
    pub async fn update(&self, resource: &T) -> Result<T> {
        let gk = T::group_kind();
        let rel = paths::resource_path(&gk, &resource.key());

        let (status, raw) = self.execute(Method::PUT, &rel, Some(resource)).await?;
        response::decode_body(status, &raw)
    }

    /// Replace the status sub-resource. The full body is sent; the server
    /// recomputes status metadata such as the update timestamp.
    pub async fn update_status(&self, resource: &T) -> Result<T> {
        let gk = T::group_kind();
        let rel = paths::status_path(&gk, &resource.key());

        let (status, raw) = self.execute(Method::PUT, &rel, Some(resource)).await?;
        response::decode_body(status, &raw)
    }

    /// Delete a resource.
    ///
    /// Deleting an absent resource surfaces `Error::NotFound`; callers that
    /// want idempotent semantics can tolerate it via [`Error::is_not_found`].
    pub async fn delete(&self, shard_id: Option<&str>, key: &ResourceKey) -> Result<()> {
        let gk = T::group_kind();
        debug!(group = %gk.group, kind = %gk.kind, name = %key.name, "delete resource");
        let rel = format!(
            "{}{}",
            paths::resource_path(&gk, key),
            paths::shard_query(shard_id)
        );

        let (status, raw) = self.execute::<()>(Method::DELETE, &rel, None).await?;
        response::expect_no_body(status, &raw)
    }

    // ==================== Transport ====================

    /// Issue exactly one request and read the whole response.
    ///
    /// The body is serialized up front so a bad payload fails before any
    /// network I/O. Reading the full body drains the connection back to the
    /// pool on every path, including later decode failures.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<&B>,
    ) -> Result<(StatusCode, Vec<u8>)> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let mut request = self.client.request(method, &url);

        if let Some(body) = body {
            let payload = serde_json::to_vec(body).map_err(Error::Serialize)?;
            request = request
                .header(header::CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.bytes().await?.to_vec();
        Ok((status, raw))
    }

    async fn fetch_page(&self, rel: &str) -> Result<Vec<T>> {
        let (status, raw) = self.execute::<()>(Method::GET, rel, None).await?;
        response::decode_body(status, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GroupKind;
    use serde::Deserialize;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Dummy {
        namespace: String,
        name: String,
    }

    impl ResourceObject for Dummy {
        fn group_kind() -> GroupKind {
            GroupKind::new("test", "dummy")
        }
        fn key(&self) -> ResourceKey {
            ResourceKey::new(&self.namespace, &self.name)
        }
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let provider = StateManagerProvider::<Dummy>::new(StateManagerConfig {
            base_url: "http://localhost:8080/".into(),
            ..Default::default()
        });
        assert_eq!(provider.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_provider_is_send_sync() {
        fn assert_send_sync<P: Send + Sync>() {}
        assert_send_sync::<StateManagerProvider<Dummy>>();
    }
}
