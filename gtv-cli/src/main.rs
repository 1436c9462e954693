//! GTV CLI - Command line tool for the global temperature variance heat map.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gtv-cli",
    version,
    about = "Global monthly temperature heat map toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: gtv_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    if let Err(e) = gtv_cmd::run(cli.command).await {
        log::error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}
