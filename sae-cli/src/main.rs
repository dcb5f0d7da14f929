//! SAE CLI - Command line tool for admin-element option lookup tables.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "sae-cli",
    version,
    about = "Admin element lookup table toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: sae_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("starting sae-cli");
    sae_cmd::run(cli.command)
}
