use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyKind {
    Virtualenv,
    Fixed,
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrategyKind::Virtualenv => write!(f, "virtualenv"),
            StrategyKind::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "virtualenv" | "venv" => Ok(StrategyKind::Virtualenv),
            "fixed" | "path" => Ok(StrategyKind::Fixed),
            other => Err(anyhow::anyhow!("Unknown executable strategy: {}", other)),
        }
    }
}

/// How the kraken executable is located for each invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecutableStrategy {
    /// Activate `<venv_root>/<env_name>` and look kraken up inside it.
    Virtualenv { env_name: String, venv_root: PathBuf },
    /// Run `name` straight from the process search path.
    Fixed { name: String },
}

impl ExecutableStrategy {
    pub fn virtualenv(env_name: impl Into<String>, venv_root: impl Into<PathBuf>) -> Self {
        ExecutableStrategy::Virtualenv {
            env_name: env_name.into(),
            venv_root: venv_root.into(),
        }
    }

    pub fn fixed(name: impl Into<String>) -> Self {
        ExecutableStrategy::Fixed { name: name.into() }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            ExecutableStrategy::Virtualenv { .. } => StrategyKind::Virtualenv,
            ExecutableStrategy::Fixed { .. } => StrategyKind::Fixed,
        }
    }
}

impl std::fmt::Display for ExecutableStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExecutableStrategy::Virtualenv { env_name, venv_root } => {
                write!(f, "virtualenv {} in {}", env_name, venv_root.display())
            }
            ExecutableStrategy::Fixed { name } => write!(f, "fixed executable {}", name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedExecutable {
    path: PathBuf,
}

impl ResolvedExecutable {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AsRef<Path> for ResolvedExecutable {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}
