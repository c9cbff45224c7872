//! Client library for the eCloud REST API
//!
//! ```ignore
//! use ecloud::{ApiRequestParameters, Config, EcloudService};
//!
//! async fn example() -> anyhow::Result<()> {
//!     let service = EcloudService::new(Config::load().connection()?);
//!
//!     for vpc in service.get_vpcs(ApiRequestParameters::default()).await? {
//!         println!("{} {}", vpc.id, vpc.name);
//!     }
//!
//!     match service.get_instance("i-abcdef12").await {
//!         Err(e) if e.is_not_found() => println!("gone"),
//!         other => println!("{:?}", other?.name),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The crate does not install a tracing subscriber; requests are logged at
//! `debug` and API failures at `error` under the `ecloud` target.

pub mod config;
pub mod connection;
pub mod ecloud;
pub mod error;
pub mod resource;

pub use config::Config;
pub use connection::{
    ApiRequestParameters, Connection, Filter, FilterOperator, HttpConnection, Sorting, TaskId,
    TaskReference,
};
pub use ecloud::EcloudService;
pub use error::{EcloudError, Result};
pub use resource::{Paginated, ResourceClient};
