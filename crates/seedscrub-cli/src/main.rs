mod cli;
mod commands;

use clap::Parser;
use seedscrub_config::Config;

fn main() {
    // Logs go to stderr; stdout only carries the confirmation line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = cli::Cli::parse();

    if let Err(err) = commands::run::handle(&Config::default()) {
        eprintln!("seedscrub error: {:#}", err);
        std::process::exit(1);
    }
}
