use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use skatehubba::launcher::{self, LaunchOptions};

/// Environment variable holding the tracing filter (e.g. `skatehubba=debug`)
const LOG_ENV: &str = "SKATEHUBBA_LOG";

#[derive(Parser)]
#[command(author, version = env!("CARGO_PKG_VERSION"), about = "Install dependencies once, then launch the SkateHubba mobile + web dev task", long_about = None)]
struct Cli {
    /// Repository root (default: directory containing this launcher)
    #[arg(long, value_name = "DIR")]
    root: Option<String>,

    /// Launcher config file (default: <root>/launcher.toml if present)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Show what would run without running anything
    #[arg(long)]
    dry_run: bool,

    /// Log launcher diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = launcher::execute(LaunchOptions {
        root: cli.root,
        config: cli.config,
        dry_run: cli.dry_run,
    });

    std::process::exit(outcome.exit_code());
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "skatehubba=debug"
    } else {
        "skatehubba=warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
