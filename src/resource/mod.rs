//! Resource abstraction layer
//!
//! This module provides a data-driven approach to eCloud resources.
//! Resource definitions are loaded from JSON files at compile time, so a new
//! resource only needs a registry entry and an entity type.
//!
//! # Architecture
//!
//! - [`registry`] - Loads and caches resource definitions from embedded JSON
//! - [`fetcher`] - Page fetching and the all-pages aggregator
//! - [`client`] - The generic list/get/create/patch/delete operation set
//!
//! # Resource Definitions
//!
//! Resources are defined in JSON files under `src/resources/`:
//! - `ecloud_v2.json` - current API (VPCs, instances, networks, firewalls, ...)
//! - `ecloud_v1.json` - legacy API (virtual machines, solutions, pods, ...)
//!
//! # Example
//!
//! ```ignore
//! use ecloud::resource::ResourceClient;
//! use ecloud::ecloud::Vpc;
//!
//! async fn list_vpcs(conn: &HttpConnection) -> ecloud::Result<Vec<Vpc>> {
//!     ResourceClient::<_, Vpc>::new(conn)?
//!         .list(ApiRequestParameters::default())
//!         .await
//! }
//! ```

pub mod client;
pub mod fetcher;
pub mod registry;

pub use client::{Creatable, Deletable, Patchable, Resource, ResourceClient, ResourceId};
pub use fetcher::{fetch_all, fetch_page, Page, PageScope, Paginated};
pub use registry::*;
