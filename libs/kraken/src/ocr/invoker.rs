use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;

use super::command::build_command_args;
use super::types::{OcrOutput, OcrRequest, OcrResult};
use crate::{KrakenError, Result};

/// Runs the argument list as one child process and waits for it to exit.
pub async fn execute_command(args: &[OsString]) -> Result<OcrResult> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| KrakenError::InvalidRequest("empty command".to_string()))?;

    let output = Command::new(program).args(rest).output().await.map_err(|e| {
        KrakenError::Unexpected(format!(
            "Failed to run {}: {}",
            Path::new(program).display(),
            e
        ))
    })?;

    Ok(OcrResult {
        // killed by a signal
        exit_code: output.status.code().unwrap_or(-1),
        stdout_text: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr_text: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

pub async fn run_ocr(executable: &Path, request: &OcrRequest) -> Result<OcrOutput> {
    let args = build_command_args(executable, request);
    log::info!("Running kraken: {:?}", args);

    let result = execute_command(&args).await?;
    if !result.success() {
        log::error!(
            "kraken exited with status {}: {}",
            result.exit_code,
            result.stderr_text.trim()
        );
        return Err(KrakenError::OcrExecution {
            exit_code: result.exit_code,
            stderr: result.stderr_text,
        });
    }
    if !result.stdout_text.trim().is_empty() {
        log::debug!("kraken stdout: {}", result.stdout_text.trim());
    }

    let content = tokio::fs::read_to_string(request.output_path())
        .await
        .map_err(|e| {
            KrakenError::Unexpected(format!(
                "Failed to read OCR output {}: {}",
                request.output_path().display(),
                e
            ))
        })?;

    log::info!("kraken produced {} bytes of output", content.len());
    Ok(OcrOutput::new(request.options().output_format, content))
}
