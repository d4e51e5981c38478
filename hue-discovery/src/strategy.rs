//! Strategy contract and capability-gated registry
//!
//! Strategies are registered in a static table mapping a name to a
//! constructor, filtered by a capability predicate evaluated once per
//! process. This keeps environment detection out of the orchestration
//! logic: the orchestrator only ever sees the strategies that can actually
//! run here.

use std::net::{Ipv4Addr, UdpSocket};
use std::sync::OnceLock;

use async_trait::async_trait;

use crate::error::Result;
use crate::nupnp::NupnpStrategy;
use crate::upnp::UpnpStrategy;
use crate::DiscoveredBridge;

/// A pluggable algorithm for locating bridges on a network
///
/// Implementations are stateless and shared-nothing; they must be
/// `Send + Sync` because all selected strategies run concurrently. All
/// failure is communicated through the returned `Result`; `discover`
/// never panics.
#[async_trait]
pub trait DiscoveryStrategy: Send + Sync {
    /// Registry name of this strategy
    fn name(&self) -> &'static str;

    /// Scan for bridges
    async fn discover(&self) -> Result<Vec<DiscoveredBridge>>;
}

/// Registry entry binding a strategy name to its constructor
#[derive(Debug)]
pub(crate) struct StrategyRegistration {
    pub name: &'static str,
    enabled: fn() -> bool,
    pub construct: fn() -> Box<dyn DiscoveryStrategy>,
}

fn always_enabled() -> bool {
    true
}

/// Probe once whether this environment can join UDP multicast groups
///
/// Restricted environments (containers without network capabilities, some
/// CI hosts) fail the join, which disables the multicast strategy.
fn multicast_enabled() -> bool {
    static CAPABILITY: OnceLock<bool> = OnceLock::new();
    *CAPABILITY.get_or_init(|| {
        UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))
            .and_then(|socket| {
                socket.join_multicast_v4(
                    &Ipv4Addr::new(239, 255, 255, 250),
                    &Ipv4Addr::UNSPECIFIED,
                )
            })
            .is_ok()
    })
}

fn construct_nupnp() -> Box<dyn DiscoveryStrategy> {
    Box::new(NupnpStrategy::new())
}

fn construct_upnp() -> Box<dyn DiscoveryStrategy> {
    Box::new(UpnpStrategy::new())
}

static REGISTERED: &[StrategyRegistration] = &[
    StrategyRegistration {
        name: "nupnp",
        enabled: always_enabled,
        construct: construct_nupnp,
    },
    StrategyRegistration {
        name: "upnp",
        enabled: multicast_enabled,
        construct: construct_upnp,
    },
];

/// Strategies registered and enabled in the current environment
pub(crate) fn enabled_strategies() -> Vec<&'static StrategyRegistration> {
    REGISTERED
        .iter()
        .filter(|registration| (registration.enabled)())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nupnp_is_always_enabled() {
        let names: Vec<&str> = enabled_strategies()
            .iter()
            .map(|registration| registration.name)
            .collect();

        assert!(names.contains(&"nupnp"));
    }

    #[test]
    fn test_enabled_strategies_is_subset_of_registry() {
        for registration in enabled_strategies() {
            assert!(matches!(registration.name, "nupnp" | "upnp"));
        }
    }

    #[test]
    fn test_constructors_report_their_registry_name() {
        for registration in REGISTERED {
            let strategy = (registration.construct)();
            assert_eq!(strategy.name(), registration.name);
        }
    }
}
