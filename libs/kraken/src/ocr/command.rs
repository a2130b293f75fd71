use std::ffi::OsString;
use std::path::Path;

use super::types::{OcrRequest, OutputFormat};

/// Builds the kraken argument list, executable first. Flag order is fixed:
/// model, layout analysis, binarization, output format.
pub fn build_command_args(executable: &Path, request: &OcrRequest) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        executable.into(),
        "-i".into(),
        request.input_image_path().into(),
        request.output_path().into(),
        "ocr".into(),
    ];

    let options = request.options();
    if let Some(model) = options.model() {
        args.push("-m".into());
        args.push(model.into());
    }
    if options.layout_analysis {
        args.push("-l".into());
    }
    if !options.binarization {
        args.push("--no-binarization".into());
    }
    if options.output_format == OutputFormat::Json {
        args.push("--output-format".into());
        args.push("json".into());
    }

    args
}
