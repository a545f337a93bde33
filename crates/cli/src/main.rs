use as112_domain::zone::reserved_zone_definitions;
use as112_domain::CliOverrides;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

mod bootstrap;
mod lifecycle;
mod server;

#[derive(Parser, Debug)]
#[command(name = "as112")]
#[command(version)]
#[command(about = "AS112 server - authoritative negative answers for private-use reverse zones")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port (UDP and TCP)
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Write a pprof CPU profile to this file on shutdown
    #[arg(long, value_name = "FILE")]
    cpuprofile: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        cpu_profile: cli.cpuprofile.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting AS112 server v{}", env!("CARGO_PKG_VERSION"));

    let profiler = match &config.profiling.cpu_profile {
        Some(path) => Some(bootstrap::CpuProfiler::start(path)?),
        None => None,
    };

    let mut controller = lifecycle::LifecycleController::new();
    let running = controller.start(&config.server, &reserved_zone_definitions())?;
    info!(address = %running.local_addr, "AS112 server running");

    let result = controller
        .run_until(running, lifecycle::termination_signal())
        .await;

    if let Some(profiler) = profiler {
        if let Err(e) = profiler.finish() {
            warn!(error = %e, "Failed to write CPU profile");
        }
    }

    info!(state = %controller.state(), "Server shutdown complete");
    result
}
