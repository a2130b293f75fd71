use kraken::common::get_current_timestamp_str;
use kraken::ocr::{OcrOptions, OcrOutput, OutputFormat};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub success: bool,
    pub message: String,
    pub output_format: Option<OutputFormat>,
    pub text: Option<String>,
    pub processed_at: String,
}

impl ProcessResponse {
    pub fn ok(output: OcrOutput) -> Self {
        Self {
            success: true,
            message: "OCR Output".to_string(),
            output_format: Some(output.format),
            text: Some(output.content),
            processed_at: get_current_timestamp_str(),
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            message,
            output_format: None,
            text: None,
            processed_at: get_current_timestamp_str(),
        }
    }
}

/// JSON body for `/api/ocr/base64`. Option fields sit next to `image`.
#[derive(Debug, Deserialize)]
pub struct Base64OcrRequest {
    pub image: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(flatten)]
    pub options: OcrOptions,
}
