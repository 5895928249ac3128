use log::info;

use crate::config::params::NetworkParams;
use crate::errors::{ParamsError, ParamsResult};
use crate::network::NetworkId;

/// Owns the four verified parameter sets and remembers which network is active.
///
/// Construction builds and verifies every network up front, so a registry
/// that exists has correct genesis blocks. Selection happens once; after that
/// the registry is read-only apart from the unit-test mutators reached through
/// [`ParamsRegistry::modifiable`].
#[derive(Clone, Debug)]
pub struct ParamsRegistry {
    main: NetworkParams,
    test: NetworkParams,
    regtest: NetworkParams,
    unittest: NetworkParams,
    active: Option<NetworkId>,
}

impl ParamsRegistry {
    pub fn new() -> ParamsResult<Self> {
        let main = NetworkParams::main()?;
        let test = main.clone().into_testnet()?;
        let regtest = test.clone().into_regtest()?;
        let unittest = main.clone().into_unittest()?;
        Ok(Self { main, test, regtest, unittest, active: None })
    }

    /// Selects the active network. Repeating the current selection is a no-op;
    /// switching to a different network is refused.
    pub fn select_network(&mut self, network: NetworkId) -> ParamsResult<&NetworkParams> {
        let current = self.active;
        match current {
            Some(active) if active != network => {
                return Err(ParamsError::NetworkAlreadySelected { active, requested: network });
            }
            Some(_) => {}
            None => {
                let params = self.params_for(network);
                info!("Selected network {} (port {}, genesis {})", network, params.default_port, params.genesis.hash());
                self.active = Some(network);
            }
        }
        Ok(self.params_for(network))
    }

    /// Parses a network name such as `"regtest"` and selects it.
    pub fn select_network_by_name(&mut self, name: &str) -> ParamsResult<&NetworkParams> {
        let network: NetworkId = name.parse()?;
        self.select_network(network)
    }

    pub fn active_network(&self) -> Option<NetworkId> {
        self.active
    }

    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> ParamsResult<&NetworkParams> {
        self.active.map(|network| self.params_for(network)).ok_or(ParamsError::NetworkNotSelected)
    }

    /// Looks up any network, regardless of selection state.
    pub fn params_for(&self, network: NetworkId) -> &NetworkParams {
        match network {
            NetworkId::Main => &self.main,
            NetworkId::Test => &self.test,
            NetworkId::RegTest => &self.regtest,
            NetworkId::UnitTest => &self.unittest,
        }
    }

    /// Mutable access to the unit-test parameters; only available while unittest is active.
    pub fn modifiable(&mut self) -> ParamsResult<UnitTestParams<'_>> {
        match self.active {
            Some(NetworkId::UnitTest) => Ok(UnitTestParams { params: &mut self.unittest }),
            Some(other) => Err(ParamsError::NotUnitTestNetwork(other)),
            None => Err(ParamsError::NetworkNotSelected),
        }
    }
}

/// Handle exposing the four unit-test mutators.
pub struct UnitTestParams<'a> {
    params: &'a mut NetworkParams,
}

impl UnitTestParams<'_> {
    pub fn set_subsidy_halving_interval(&mut self, interval: i32) {
        self.params.subsidy_halving_interval = interval;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.params.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.params.allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.params.skip_proof_of_work_check = skip;
    }

    pub fn params(&self) -> &NetworkParams {
        self.params
    }
}
