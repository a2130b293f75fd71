use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    #[serde(rename = "plain")]
    PlainText,
    #[serde(rename = "json")]
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PlainText => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "plain text" | "text" | "txt" => Ok(OutputFormat::PlainText),
            "json" => Ok(OutputFormat::Json),
            other => Err(anyhow::anyhow!("Unsupported output format: {}", other)),
        }
    }
}

/// User-facing OCR settings. Binarization is the only option enabled by default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrOptions {
    pub custom_model_path: Option<String>,
    pub layout_analysis: bool,
    pub binarization: bool,
    pub output_format: OutputFormat,
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            custom_model_path: None,
            layout_analysis: false,
            binarization: true,
            output_format: OutputFormat::PlainText,
        }
    }
}

impl OcrOptions {
    pub fn new(
        custom_model_path: Option<String>,
        layout_analysis: bool,
        binarization: bool,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            custom_model_path,
            layout_analysis,
            binarization,
            output_format,
        }
    }

    /// The model path, if one was given and is non-empty.
    pub fn model(&self) -> Option<&str> {
        self.custom_model_path.as_deref().filter(|m| !m.is_empty())
    }
}

/// One kraken run: where the image is, where kraken writes, and how.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OcrRequest {
    input_image_path: PathBuf,
    output_path: PathBuf,
    options: OcrOptions,
}

impl OcrRequest {
    pub fn new(
        input_image_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        options: OcrOptions,
    ) -> Self {
        Self {
            input_image_path: input_image_path.into(),
            output_path: output_path.into(),
            options,
        }
    }

    pub fn input_image_path(&self) -> &Path {
        &self.input_image_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn options(&self) -> &OcrOptions {
        &self.options
    }
}

/// Raw outcome of the child process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OcrResult {
    pub exit_code: i32,
    pub stdout_text: String,
    pub stderr_text: String,
}

impl OcrResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Contents of the output file after a successful run. JSON output is kept
/// as the raw string kraken wrote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OcrOutput {
    pub format: OutputFormat,
    pub content: String,
}

impl OcrOutput {
    pub fn new(format: OutputFormat, content: String) -> Self {
        Self { format, content }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
