//! Console output for the daemon

use consensus_core::NetworkParams;

/// ANSI color codes for terminal output
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const BRIGHT_RED: &str = "\x1b[91m";
    pub const BRIGHT_GREEN: &str = "\x1b[92m";
    pub const BRIGHT_YELLOW: &str = "\x1b[93m";
    pub const BRIGHT_CYAN: &str = "\x1b[96m";
    pub const BRIGHT_WHITE: &str = "\x1b[97m";
}

/// Print startup banner
pub fn print_banner(version: &str, network: &str) {
    let rule = "═".repeat(62);
    println!();
    println!("{}╔{}╗{}", colors::BRIGHT_CYAN, rule, colors::RESET);
    println!(
        "{}║{}  {}MNSCOIN NODE - MNSD v{:<39}{}{}║{}",
        colors::BRIGHT_CYAN,
        colors::RESET,
        colors::BOLD,
        version,
        colors::RESET,
        colors::BRIGHT_CYAN,
        colors::RESET
    );
    println!(
        "{}║{}  Network: {}{:<51}{}{}║{}",
        colors::BRIGHT_CYAN,
        colors::RESET,
        colors::BRIGHT_GREEN,
        network,
        colors::RESET,
        colors::BRIGHT_CYAN,
        colors::RESET
    );
    println!("{}╚{}╝{}", colors::BRIGHT_CYAN, rule, colors::RESET);
    println!();
}

/// Status types for colored output
#[derive(Debug, Clone, Copy)]
pub enum StatusType {
    Success,
    Warning,
    Error,
}

/// Print status line with icon and color
pub fn print_status(icon: &str, message: &str, status: StatusType) {
    let color = match status {
        StatusType::Success => colors::BRIGHT_GREEN,
        StatusType::Warning => colors::BRIGHT_YELLOW,
        StatusType::Error => colors::BRIGHT_RED,
    };
    println!("{}[{}]{} {}{}{}", color, icon, colors::RESET, color, message, colors::RESET);
}

/// Print a section header
pub fn print_section(title: &str) {
    let rule = "━".repeat(64);
    println!();
    println!("{}{}{}", colors::DIM, rule, colors::RESET);
    println!("{}  {}{}{}", colors::BRIGHT_CYAN, colors::BOLD, title, colors::RESET);
    println!("{}{}{}", colors::DIM, rule, colors::RESET);
    println!();
}

/// Print key-value pair in a formatted way
pub fn print_kv(key: &str, value: &str) {
    println!("  {}{}:{} {}{}{}", colors::BRIGHT_WHITE, key, colors::RESET, colors::BRIGHT_CYAN, value, colors::RESET);
}

/// Print the parameters an operator usually wants to double-check
pub fn print_params_summary(params: &NetworkParams) {
    print_section("Chain Parameters");

    print_kv("Network", params.network_name());
    print_kv("Magic", &hex::encode(params.message_start));
    print_kv("P2P Port", &params.default_port.to_string());
    print_kv("Genesis", &params.genesis.hash().to_string());
    print_kv("Merkle Root", &params.genesis.merkle_root().to_string());
    print_kv("Checkpoints", &params.checkpoints.len().to_string());
    print_kv("Last Checkpoint", &params.checkpoints.last_checkpoint_height().to_string());
    print_kv("Fixed Seeds", &params.fixed_seeds.len().to_string());
    print_kv("DNS Seeds", &params.dns_seeds.len().to_string());
    print_kv("Target Spacing", &format!("{}s", params.target_spacing));
    print_kv("Maturity", &params.maturity.to_string());
}
