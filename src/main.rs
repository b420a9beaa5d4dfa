use anyhow::Context;
use clap::Parser;
use marquee::config::Config;
use marquee::logging::init_tracing;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "marquee", version, about = "Search and discover movies from the terminal")]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Quiet period before a typed query is searched
    #[arg(long, value_name = "MS")]
    debounce_ms: Option<u64>,

    /// Log file (default: next to the config file)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run(Cli::parse()) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path).context("Failed to load configuration")?;

    if let Some(ms) = cli.debounce_ms {
        config.search.debounce_ms = ms;
        config.validate().context("Invalid --debounce-ms")?;
    }

    let log_path = cli
        .log_file
        .unwrap_or_else(|| Config::log_path_for(&config_path));
    init_tracing(&log_path);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        debounce_ms = config.search.debounce_ms,
        trending_remote = config.trending.is_remote(),
        "Starting marquee"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("marquee-worker")
        .build()
        .context("Failed to start async runtime")?;

    let result = marquee::ui::run(&config, runtime.handle().clone());
    runtime.shutdown_timeout(Duration::from_millis(500));
    result.context("Terminal UI failed")
}
