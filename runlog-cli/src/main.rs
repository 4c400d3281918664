//! runlog - Command line tool for charting weekly workout volume.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "runlog",
    version,
    about = "Weekly workout volume and VO2 max charts from a published sheet"
)]
struct Cli {
    #[command(subcommand)]
    command: runlog_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    runlog_cmd::run(cli.command).await
}
