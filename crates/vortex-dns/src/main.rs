use anyhow::Context as _;
use clap::Parser as _;
use vortex_dns::{setup_logging, App, Args};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_dir = args.resolve_config_dir()?;
    setup_logging(&config_dir.join("debug.log"))?;

    App::run_until_completion(args, config_dir)
        .await
        .context("management API exited with an error")
}
