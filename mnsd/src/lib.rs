//! MNSD - Mnscoin node daemon
//!
//! Loads configuration, builds and verifies the chain parameters for every
//! network, and selects the one this node runs on.

pub mod cli;
pub mod config;
pub mod node;
pub mod ui;

pub use cli::Args;
pub use config::Config;
pub use node::Node;
