use clap::Parser;

/// Takes no arguments: always rewrites the configured seed file.
#[derive(Parser)]
#[command(name = "seedscrub")]
#[command(
    about = "Replace quoted URL literals in a SQL seed file with a placeholder URL",
    long_about = None
)]
#[command(version)]
pub struct Cli {}
