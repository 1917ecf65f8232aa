use clap::Parser;
use tracing_subscriber::EnvFilter;

use silo_cli::{Cli, run};

fn main() {
    // Diagnostics go to stderr so exported log lines on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
