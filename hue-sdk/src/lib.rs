//! Client SDK for Hue bridges
//!
//! One roof over the two halves of the workspace:
//!
//! - [`hue_api`]: a facade client for a bridge's REST resources, with
//!   lazily-instantiated accessors sharing a single transport
//! - [`hue_discovery`]: parallel multi-strategy discovery of bridges on
//!   the local network
//!
//! # Finding and talking to a bridge
//!
//! ```no_run
//! use hue_sdk::{discover, Client, ClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let bridges = discover().await?;
//! let first = bridges.first().ok_or("no bridge on this network")?;
//!
//! let client = Client::new(
//!     ClientConfig::new(first.internal_ip_address.clone()).with_username("myuser"),
//! );
//!
//! let bridge = client.bridge().get().await?;
//! println!("Connected to {} ({})", bridge.name, bridge.id);
//! # Ok(())
//! # }
//! ```

pub use hue_api;
pub use hue_discovery;

pub use hue_api::{ApiError, Client, ClientConfig};
pub use hue_discovery::{
    discover, discover_with, DiscoveredBridge, Discovery, DiscoveryError, DiscoveryOptions,
};
