use mnsd::{cli, ui, Config, Node};
use std::process;
use tracing::{error, info};

fn main() {
    let args = cli::parse_args();

    let mut config = match &args.config_path {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{:#}", e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    init_logging(&config.logging.level);

    if args.interactive() {
        ui::print_banner(env!("CARGO_PKG_VERSION"), &config.network.name);
    }

    let node = match Node::start(&config) {
        Ok(node) => node,
        Err(e) => {
            if args.interactive() {
                ui::print_status("✗", &format!("Startup failed: {:#}", e), ui::StatusType::Error);
            }
            error!("Startup failed: {:#}", e);
            process::exit(1);
        }
    };

    let params = match node.params() {
        Ok(params) => params,
        Err(e) => {
            error!("{:#}", e);
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(params) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to encode parameters: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if args.interactive() {
        ui::print_params_summary(params);
        ui::print_status("✓", &format!("Network {} selected", params.network_name()), ui::StatusType::Success);
    }
    info!("mnsd ready on {} (port {})", params.network_name(), params.default_port);
}

fn init_logging(level: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt().with_env_filter(filter).with_target(true).with_thread_ids(true).with_writer(std::io::stderr).init();
}
