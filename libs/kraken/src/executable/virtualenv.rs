use std::path::{Path, PathBuf};
use tokio::process::Command;

use super::types::ResolvedExecutable;
use super::DEFAULT_EXECUTABLE;
use crate::{KrakenError, Result};

// $1 is the activate script, $2 the tool to look up.
const LOOKUP_SCRIPT: &str = r#"source "$1" && command -v "$2""#;

/// `~/.virtualenvs`, or `.virtualenvs` relative to the working directory when
/// no home directory is known.
pub fn default_venv_root() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".virtualenvs"),
        None => {
            log::warn!("No home directory found, using relative .virtualenvs");
            PathBuf::from(".virtualenvs")
        }
    }
}

/// Looks up kraken inside the named virtualenv under the default root.
pub async fn resolve_executable(env_name: &str) -> Result<ResolvedExecutable> {
    resolve_executable_in(&default_venv_root(), env_name).await
}

pub async fn resolve_executable_in(venv_root: &Path, env_name: &str) -> Result<ResolvedExecutable> {
    let activate = venv_root.join(env_name).join("bin").join("activate");
    log::debug!("Resolving {} via {}", DEFAULT_EXECUTABLE, activate.display());

    let output = Command::new("bash")
        .arg("-c")
        .arg(LOOKUP_SCRIPT)
        .arg("kraken-resolve")
        .arg(&activate)
        .arg(DEFAULT_EXECUTABLE)
        .output()
        .await
        .map_err(|e| KrakenError::EnvironmentResolution(format!("failed to spawn bash: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        log::error!("Virtualenv {} lookup failed: {}", env_name, stderr.trim());
        if stderr.trim().is_empty() {
            return Err(KrakenError::EnvironmentResolution(format!(
                "{} not found in virtualenv {}",
                DEFAULT_EXECUTABLE, env_name
            )));
        }
        return Err(KrakenError::EnvironmentResolution(stderr));
    }

    let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if path.is_empty() {
        return Err(KrakenError::EnvironmentResolution(format!(
            "lookup of {} in virtualenv {} returned no path",
            DEFAULT_EXECUTABLE, env_name
        )));
    }

    log::info!("Resolved kraken executable: {}", path);
    Ok(ResolvedExecutable::new(path))
}
