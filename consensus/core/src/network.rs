use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParamsError;

/// Identifies one of the networks a node can join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    /// Production network
    Main,
    /// Public test network
    Test,
    /// Local regression-test network
    RegTest,
    /// In-process unit-test network
    UnitTest,
}

impl NetworkId {
    /// The string id used on the command line and in config files.
    pub fn name(&self) -> &'static str {
        match self {
            NetworkId::Main => "main",
            NetworkId::Test => "test",
            NetworkId::RegTest => "regtest",
            NetworkId::UnitTest => "unittest",
        }
    }

    /// Returns an iterator over all NetworkId variants
    pub fn iter() -> impl Iterator<Item = NetworkId> {
        [NetworkId::Main, NetworkId::Test, NetworkId::RegTest, NetworkId::UnitTest].into_iter()
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkId {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(NetworkId::Main),
            "test" => Ok(NetworkId::Test),
            "regtest" => Ok(NetworkId::RegTest),
            "unittest" => Ok(NetworkId::UnitTest),
            _ => Err(ParamsError::UnknownNetwork(s.to_string())),
        }
    }
}
