use anyhow::Context;
use arsim::cli::Cli;
use arsim::logging::init_tracing;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    init_tracing(&config.logging);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting arsim");

    arsim::ui::run(config, cli.startup_login()).context("terminal UI failed")?;

    tracing::info!("Exited cleanly");
    Ok(())
}
