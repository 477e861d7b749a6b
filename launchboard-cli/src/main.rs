use clap::Parser;
use colored::*;

use launchboard::cli::{Cli, run};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        log::debug!("Command failed: {:?}", e);
        eprintln!("{} {:#}", "Error:".bright_red().bold(), e);
        std::process::exit(1);
    }
}

/// `RUST_LOG` wins; otherwise info, with our own debug output under `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "launchboard=debug,info" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
