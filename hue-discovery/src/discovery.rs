//! Discovery orchestration
//!
//! Each `discover()` call is an independent run through select → dispatch
//! → collect → merge: resolve the configured strategy name against the
//! registry, launch every selected strategy concurrently, join on all of
//! them (failing fast on the first error), and fold the results into one
//! deduplicated list keyed by bridge id.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use futures::future::try_join_all;

use crate::error::{DiscoveryError, Result};
use crate::strategy::{enabled_strategies, DiscoveryStrategy, StrategyRegistration};
use crate::DiscoveredBridge;

/// Option value selecting every enabled strategy
pub const ALL_STRATEGIES: &str = "all";

/// Options for a discovery run
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// Strategy name to run: `"nupnp"`, `"upnp"`, or [`ALL_STRATEGIES`]
    pub strategy: String,
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            strategy: ALL_STRATEGIES.to_string(),
        }
    }
}

impl DiscoveryOptions {
    /// Options selecting a single named strategy
    pub fn strategy(name: impl Into<String>) -> Self {
        Self {
            strategy: name.into(),
        }
    }
}

/// Orchestrates bridge discovery across strategies
///
/// Stateless beyond its options: every [`discover`](Discovery::discover)
/// call re-selects and re-runs the strategies.
pub struct Discovery {
    options: DiscoveryOptions,
    strategies: Option<Vec<Box<dyn DiscoveryStrategy>>>,
}

impl Discovery {
    /// Create a discovery run over the registered strategies
    pub fn new(options: DiscoveryOptions) -> Self {
        Self {
            options,
            strategies: None,
        }
    }

    /// Create a discovery run over caller-supplied strategies
    ///
    /// Bypasses the registry entirely; useful for custom scan backends.
    /// Merge semantics are unchanged: later strategies in the given order
    /// win on id collisions.
    pub fn with_strategies(strategies: Vec<Box<dyn DiscoveryStrategy>>) -> Self {
        Self {
            options: DiscoveryOptions::default(),
            strategies: Some(strategies),
        }
    }

    /// Run the selected strategies and merge their results
    ///
    /// All strategies are dispatched before any is awaited, so total wall
    /// time is bounded by the slowest strategy, not their sum. If any
    /// strategy fails, the whole call fails; no partial result is
    /// surfaced.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::UnknownStrategy`] before any network
    /// activity when the configured name is not registered here, and the
    /// first failing strategy's error otherwise.
    pub async fn discover(&self) -> Result<Vec<DiscoveredBridge>> {
        match &self.strategies {
            Some(strategies) => {
                Self::run(strategies.iter().map(|strategy| strategy.as_ref()).collect()).await
            }
            None => {
                let constructed: Vec<Box<dyn DiscoveryStrategy>> = self
                    .select()?
                    .into_iter()
                    .map(|registration| (registration.construct)())
                    .collect();
                Self::run(constructed.iter().map(|strategy| strategy.as_ref()).collect()).await
            }
        }
    }

    /// Resolve the configured strategy name against the enabled registry
    fn select(&self) -> Result<Vec<&'static StrategyRegistration>> {
        let enabled = enabled_strategies();

        if self.options.strategy == ALL_STRATEGIES {
            return Ok(enabled);
        }

        enabled
            .into_iter()
            .find(|registration| registration.name == self.options.strategy)
            .map(|registration| vec![registration])
            .ok_or_else(|| DiscoveryError::UnknownStrategy(self.options.strategy.clone()))
    }

    async fn run(strategies: Vec<&dyn DiscoveryStrategy>) -> Result<Vec<DiscoveredBridge>> {
        tracing::debug!(count = strategies.len(), "dispatching discovery strategies");

        let results = try_join_all(strategies.iter().map(|strategy| strategy.discover())).await?;
        let merged = merge(results);

        tracing::debug!(bridges = merged.len(), "discovery complete");
        Ok(merged)
    }
}

/// Fold strategy results into one list with unique bridge ids
///
/// Later strategies overwrite earlier entries for the same id; output
/// order is the first-insertion order of each unique id.
fn merge(results: Vec<Vec<DiscoveredBridge>>) -> Vec<DiscoveredBridge> {
    let mut order: Vec<String> = Vec::new();
    let mut by_id: HashMap<String, DiscoveredBridge> = HashMap::new();

    for bridge in results.into_iter().flatten() {
        match by_id.entry(bridge.id.clone()) {
            Entry::Vacant(entry) => {
                order.push(bridge.id.clone());
                entry.insert(bridge);
            }
            Entry::Occupied(mut entry) => {
                entry.insert(bridge);
            }
        }
    }

    order
        .into_iter()
        .filter_map(|id| by_id.remove(&id))
        .collect()
}
