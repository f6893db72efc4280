//! Rust client SDK for the state-manager resource API
//!
//! A typed async client for a remote resource store holding arbitrary typed
//! resources addressed by group/kind/namespace/name and an owning shard.
//! Resource types implement [`ResourceObject`] and the provider handles URL
//! construction, JSON (de)serialization, error classification, and
//! pending-work pagination.
//!
//! # Example
//!
//! ```rust,no_run
//! use serde::{Deserialize, Serialize};
//! use state_manager_client::{
//!     GroupKind, ListOptions, ResourceKey, ResourceObject, StateManagerConfig,
//!     StateManagerProvider,
//! };
//!
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! struct Instance {
//!     namespace: String,
//!     name: String,
//!     shard_id: String,
//! }
//!
//! impl ResourceObject for Instance {
//!     fn group_kind() -> GroupKind {
//!         GroupKind::new("compute", "instance")
//!     }
//!     fn key(&self) -> ResourceKey {
//!         ResourceKey::new(&self.namespace, &self.name)
//!     }
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = StateManagerProvider::<Instance>::new(StateManagerConfig {
//!     base_url: "http://localhost:8080".into(),
//!     ..Default::default()
//! });
//!
//! // Create, then address the same identity for reads and updates
//! let created = provider
//!     .create(&Instance {
//!         namespace: "prod".into(),
//!         name: "vm-1".into(),
//!         shard_id: "shard-a".into(),
//!     })
//!     .await?;
//!
//! let found = provider.get(None, &created.key()).await?;
//! assert!(found.is_some());
//!
//! // Fetch the full reconciliation backlog for one shard
//! let backlog = provider.list_pending("shard-a").await?;
//!
//! // Filtered listing
//! let in_prod = provider
//!     .list(&ListOptions {
//!         namespace: Some("prod".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
mod paths;
mod response;
pub mod types;

// Re-export main types
pub use client::StateManagerProvider;
pub use error::{Error, Result};
pub use types::{
    GroupKind, ListOptions, ResourceKey, ResourceObject, StateManagerConfig, USER_AGENT,
};
