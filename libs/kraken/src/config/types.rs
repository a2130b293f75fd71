use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::executable::{
    default_venv_root, ExecutableStrategy, StrategyKind, DEFAULT_ENV_NAME, DEFAULT_EXECUTABLE,
};

pub const DEFAULT_MAX_UPLOAD_MB: usize = 20;

/// Everything needed to pick a strategy. Both variants' fields are kept so
/// that switching `kind` from a flag does not lose the other settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutableSettings {
    pub kind: StrategyKind,
    pub env_name: String,
    pub venv_root: PathBuf,
    pub executable: String,
}

impl Default for ExecutableSettings {
    fn default() -> Self {
        Self {
            kind: StrategyKind::Virtualenv,
            env_name: DEFAULT_ENV_NAME.to_string(),
            venv_root: default_venv_root(),
            executable: DEFAULT_EXECUTABLE.to_string(),
        }
    }
}

impl ExecutableSettings {
    pub fn strategy(&self) -> ExecutableStrategy {
        match self.kind {
            StrategyKind::Virtualenv => {
                ExecutableStrategy::virtualenv(self.env_name.clone(), self.venv_root.clone())
            }
            StrategyKind::Fixed => ExecutableStrategy::fixed(self.executable.clone()),
        }
    }
}

/// Converts an upload limit in megabytes, rejecting values that overflow `usize`.
pub fn megabytes_to_bytes(mb: usize) -> Result<usize> {
    mb.checked_mul(1024 * 1024)
        .with_context(|| format!("Upload limit of {} MB is too large", mb))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KrakenConfig {
    pub executable: ExecutableSettings,
    pub max_upload_bytes: usize,
}

impl Default for KrakenConfig {
    fn default() -> Self {
        Self {
            executable: ExecutableSettings::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_MB * 1024 * 1024,
        }
    }
}

impl KrakenConfig {
    pub fn new(strategy: ExecutableStrategy, max_upload_bytes: usize) -> Self {
        let mut executable = ExecutableSettings::default();
        executable.kind = strategy.kind();
        match strategy {
            ExecutableStrategy::Virtualenv { env_name, venv_root } => {
                executable.env_name = env_name;
                executable.venv_root = venv_root;
            }
            ExecutableStrategy::Fixed { name } => executable.executable = name,
        }
        Self {
            executable,
            max_upload_bytes,
        }
    }

    pub fn strategy(&self) -> ExecutableStrategy {
        self.executable.strategy()
    }

    /// Reads `KRAKEN_STRATEGY`, `KRAKEN_VENV`, `KRAKEN_VENV_ROOT`,
    /// `KRAKEN_EXECUTABLE` and `KRAKEN_MAX_UPLOAD_MB`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(kind) = get("KRAKEN_STRATEGY") {
            config.executable.kind = kind.parse().context("Invalid KRAKEN_STRATEGY")?;
        }
        if let Some(env_name) = get("KRAKEN_VENV") {
            config.executable.env_name = env_name;
        }
        if let Some(root) = get("KRAKEN_VENV_ROOT") {
            config.executable.venv_root = PathBuf::from(root);
        }
        if let Some(executable) = get("KRAKEN_EXECUTABLE") {
            config.executable.executable = executable;
        }
        if let Some(mb) = get("KRAKEN_MAX_UPLOAD_MB") {
            let mb: usize = mb
                .trim()
                .parse()
                .with_context(|| format!("Invalid KRAKEN_MAX_UPLOAD_MB: {}", mb))?;
            config.max_upload_bytes = megabytes_to_bytes(mb)?;
        }

        log::debug!("Loaded config: {:?}", config);
        Ok(config)
    }
}
