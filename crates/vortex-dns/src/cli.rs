use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;

#[derive(Parser)]
#[command(version, name = "vortex-dns")]
pub struct Args {
    /// Directory holding the list files, the query log DB and the debug log
    #[arg(long, value_name = "PATH")]
    pub config_dir: Option<PathBuf>,
    #[arg(long, value_name = "ADDR", default_value = "127.0.0.1")]
    pub host: IpAddr,
    #[arg(short('p'), long, value_name = "PORT", default_value_t = 3000)]
    pub api_port: u16,
    /// Command to run after a list change so that the resolver reloads
    /// its filtering configuration, e.g. 'resolverctl reload-lists'
    #[arg(long, value_name = "CMD")]
    pub refresh_command: Option<String>,
}

impl Args {
    /// Explicit `--config-dir`, then the platform config directory, then
    /// the current directory. Created if missing.
    pub fn resolve_config_dir(&self) -> anyhow::Result<PathBuf> {
        let dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => dirs::config_dir()
                .map(|dir| dir.join("vortex-dns"))
                .unwrap_or_else(|| PathBuf::from(".")),
        };

        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create the config directory {:?}", dir))?;

        Ok(dir)
    }
}
