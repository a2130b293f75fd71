mod types;
pub use types::{ExecutableStrategy, ResolvedExecutable, StrategyKind};

mod virtualenv;
pub use virtualenv::{default_venv_root, resolve_executable, resolve_executable_in};

use crate::Result;

pub const DEFAULT_EXECUTABLE: &str = "kraken";
pub const DEFAULT_ENV_NAME: &str = "kraken_env";

/// Resolves the kraken executable for the given strategy. Nothing is cached,
/// every call repeats the lookup.
pub async fn resolve(strategy: &ExecutableStrategy) -> Result<ResolvedExecutable> {
    match strategy {
        ExecutableStrategy::Virtualenv { env_name, venv_root } => {
            resolve_executable_in(venv_root, env_name).await
        }
        ExecutableStrategy::Fixed { name } => {
            log::debug!("Using fixed kraken executable: {}", name);
            Ok(ResolvedExecutable::new(name))
        }
    }
}
