//! Hue bridge discovery library
//!
//! This crate locates bridges on a local network by running several
//! independent discovery strategies in parallel and merging their results
//! into one deduplicated list. Two strategies ship with the crate:
//!
//! - `"nupnp"` queries the vendor's bridge lookup service over HTTPS
//! - `"upnp"` sends an SSDP multicast probe and inspects responders
//!
//! The multicast strategy is only registered in environments where joining
//! a UDP multicast group is possible; the lookup strategy is always
//! available.
//!
//! # Quick Start
//!
//! ```no_run
//! # async fn example() -> hue_discovery::Result<()> {
//! let bridges = hue_discovery::discover().await?;
//! for bridge in bridges {
//!     println!("Found {} at {}", bridge.id, bridge.internal_ip_address);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Selecting a strategy
//!
//! ```no_run
//! use hue_discovery::{discover_with, DiscoveryOptions};
//!
//! # async fn example() -> hue_discovery::Result<()> {
//! let bridges = discover_with(DiscoveryOptions::strategy("nupnp")).await?;
//! # Ok(())
//! # }
//! ```

mod description;
mod discovery;
mod error;
mod nupnp;
mod ssdp;
mod strategy;
mod upnp;

pub use discovery::{Discovery, DiscoveryOptions, ALL_STRATEGIES};
pub use error::{DiscoveryError, Result};
pub use nupnp::NupnpStrategy;
pub use strategy::DiscoveryStrategy;
pub use upnp::UpnpStrategy;

use serde::{Deserialize, Serialize};

/// A bridge located by one of the discovery strategies
///
/// Identity is the `id` field; two entries with the same id coming from
/// different strategies describe the same bridge. Fields beyond the id and
/// address are filled in only by strategies that learn them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoveredBridge {
    /// Unique bridge identifier (derived from its serial number)
    pub id: String,
    /// Address of the bridge on the local network
    pub internal_ip_address: String,
    /// Port, when reported by the strategy
    pub port: Option<u16>,
    /// Friendly name, when reported by the strategy
    pub name: Option<String>,
    /// Model identifier, when reported by the strategy
    pub model_id: Option<String>,
}

/// Discover bridges using every strategy enabled in this environment
///
/// Convenience wrapper over [`Discovery`] with default options.
pub async fn discover() -> Result<Vec<DiscoveredBridge>> {
    discover_with(DiscoveryOptions::default()).await
}

/// Discover bridges with explicit options
pub async fn discover_with(options: DiscoveryOptions) -> Result<Vec<DiscoveredBridge>> {
    Discovery::new(options).discover().await
}
