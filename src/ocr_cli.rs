use anyhow::{Context, Result};
use clap::Parser;
use kraken::config::KrakenConfig;
use kraken::ocr::{OcrOptions, OcrRequest, OutputFormat};
use kraken::process::process_ocr;
use kraken::KrakenError;
use std::path::PathBuf;

use crate::args::ExecutableArgs;
use crate::web::user_message;

#[derive(Parser, Debug)]
#[command(version, about = "A CLI tool to run Kraken OCR on an image", long_about = None)]
pub struct OcrCli {
    #[arg(long, help = "input image (jpg, jpeg, png, tiff)")]
    pub image: PathBuf,
    #[arg(long, help = "where kraken writes its output (temporary file when omitted)")]
    pub output: Option<PathBuf>,
    #[arg(long, help = "path to a custom Kraken model")]
    pub model: Option<String>,
    #[arg(long, help = "enable layout analysis")]
    pub layout: bool,
    #[arg(long, help = "disable binarization")]
    pub no_binarization: bool,
    #[arg(long, default_value = "plain", help = "output format: plain or json")]
    pub format: String,
    #[command(flatten)]
    pub executable: ExecutableArgs,
}

/// Runs kraken on `--image` and returns the output file's contents. A
/// temporary `.txt` output is used, and removed, when `--output` is omitted.
pub async fn run_ocr_cli(cli: OcrCli, mut config: KrakenConfig) -> Result<String> {
    cli.executable.apply(&mut config)?;

    if !cli.image.is_file() {
        return Err(KrakenError::InvalidRequest(format!(
            "Image not found: {}",
            cli.image.display()
        ))
        .into());
    }

    let output_format: OutputFormat = cli.format.parse()?;
    let options = OcrOptions::new(cli.model, cli.layout, !cli.no_binarization, output_format);

    // A temporary output file lives until the end of this function.
    let (output_path, _temp_output) = match cli.output {
        Some(path) => (path, None),
        None => {
            let temp = tempfile::Builder::new()
                .suffix(".txt")
                .tempfile()
                .context("Failed to create temporary output file")?
                .into_temp_path();
            (temp.to_path_buf(), Some(temp))
        }
    };

    let request = OcrRequest::new(&cli.image, output_path, options);
    let output = process_ocr(&config.strategy(), &request).await?;
    Ok(output.content)
}

/// Message printed before the CLI exits non-zero.
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<KrakenError>() {
        Some(err) => user_message(err),
        None => format!("{:#}", err),
    }
}
