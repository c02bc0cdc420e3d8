use anyhow::Context as _;
use async_trait::async_trait;
use vortex_dns_core::RefreshSignal;

/// Tells the downstream resolver to reload its filtering configuration
/// by running an external command.
pub struct CommandRefresh {
    program: String,
    args: Vec<String>,
}

impl CommandRefresh {
    pub fn new(command: &str) -> anyhow::Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().context("empty refresh command")?;

        Ok(CommandRefresh {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl RefreshSignal for CommandRefresh {
    async fn signal_refresh(&self) -> anyhow::Result<()> {
        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .status()
            .await
            .with_context(|| format!("failed to run the refresh command '{}'", self.program))?;

        if !status.success() {
            anyhow::bail!("refresh command exited with {}", status);
        }

        tracing::debug!("Resolver reload triggered via '{}'", self.program);
        Ok(())
    }
}

/// Used when no refresh command is configured: list changes still land
/// on disk and the resolver picks them up on its next restart.
pub struct NoopRefresh;

#[async_trait]
impl RefreshSignal for NoopRefresh {
    async fn signal_refresh(&self) -> anyhow::Result<()> {
        tracing::debug!("No refresh command configured, skipping the resolver reload");
        Ok(())
    }
}
