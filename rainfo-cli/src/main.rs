//! Rainfo CLI - look up US state codes, names, rainfall and conservation tips.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "rainfo",
    version,
    about = "US state rainfall and water conservation lookups"
)]
struct Cli {
    #[command(subcommand)]
    command: rainfo_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("rainfo {}", env!("CARGO_PKG_VERSION"));
    rainfo_cmd::run(cli.command)
}
