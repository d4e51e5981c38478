//! High-level client for Hue bridge REST resources
//!
//! This crate provides a facade client over a bridge's REST-managed
//! resources. Accessors are instantiated lazily on first use and all share
//! one transport; every operation is expressed as a command value delegated
//! through the owning [`Client`].
//!
//! ```no_run
//! use hue_api::{Client, ClientConfig};
//!
//! # async fn example() -> hue_api::Result<()> {
//! let client = Client::new(ClientConfig::new("192.168.1.10").with_username("myuser"));
//!
//! client.bridge().ping().await?;
//!
//! for light in client.lights().get_all().await? {
//!     println!("{}: {}", light.id, light.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod accessors;
pub mod client;
pub mod command;
pub mod commands;
pub mod config;
pub mod error;

pub use client::{Client, ResourceAccessor};
pub use command::{BridgeCommand, CommandPath, CommandRequest};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use rest_client::Method;
