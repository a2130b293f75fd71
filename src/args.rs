use anyhow::{Context, Result};
use clap::Args;
use kraken::config::KrakenConfig;
use std::path::PathBuf;

/// Flags that override the `KRAKEN_*` environment settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ExecutableArgs {
    #[arg(long, help = "How to find kraken: virtualenv or fixed")]
    pub strategy: Option<String>,
    #[arg(long, help = "Name of the virtualenv holding kraken")]
    pub venv: Option<String>,
    #[arg(long, help = "Directory containing virtualenvs (default ~/.virtualenvs)")]
    pub venv_root: Option<PathBuf>,
    #[arg(long, help = "Executable to run with the fixed strategy")]
    pub executable: Option<String>,
}

impl ExecutableArgs {
    pub fn apply(&self, config: &mut KrakenConfig) -> Result<()> {
        if let Some(strategy) = &self.strategy {
            config.executable.kind = strategy.parse().context("Invalid --strategy")?;
        }
        if let Some(venv) = &self.venv {
            config.executable.env_name = venv.clone();
        }
        if let Some(root) = &self.venv_root {
            config.executable.venv_root = root.clone();
        }
        if let Some(executable) = &self.executable {
            config.executable.executable = executable.clone();
        }
        Ok(())
    }
}
