use anyhow::{Context, Result};
use consensus_core::{NetworkParams, ParamsRegistry};
use tracing::{debug, info};

use crate::config::Config;

/// Startup state: the verified registry with the configured network selected.
pub struct Node {
    registry: ParamsRegistry,
}

impl Node {
    /// Builds every network's parameters and selects the configured one.
    ///
    /// This is the single fatal checkpoint of the daemon: any genesis or
    /// checkpoint inconsistency, or an unknown network name, fails here.
    pub fn start(config: &Config) -> Result<Self> {
        info!("Building chain parameters");
        let mut registry = ParamsRegistry::new().context("Chain parameters failed verification")?;
        let params = registry
            .select_network_by_name(&config.network.name)
            .with_context(|| format!("Cannot select network '{}'", config.network.name))?;
        debug!("Genesis merkle root {}", params.genesis.merkle_root());
        Ok(Self { registry })
    }

    pub fn registry(&self) -> &ParamsRegistry {
        &self.registry
    }

    pub fn params(&self) -> Result<&NetworkParams> {
        Ok(self.registry.active()?)
    }
}
