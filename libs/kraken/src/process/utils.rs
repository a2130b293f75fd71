use crate::executable::{resolve, ExecutableStrategy};
use crate::ocr::{run_ocr, OcrOptions, OcrOutput, OcrRequest};
use crate::upload::{validate_upload, OcrWorkspace, UploadedImage};
use crate::Result;

/// Resolves the executable, then runs kraken. A resolution failure returns
/// before kraken is ever started.
pub async fn process_ocr(strategy: &ExecutableStrategy, request: &OcrRequest) -> Result<OcrOutput> {
    let executable = resolve(strategy).await?;
    run_ocr(executable.path(), request).await
}

/// Full upload cycle: validate, stage into a temporary workspace, run, clean up.
/// The workspace is removed on every path.
pub async fn process_upload(
    strategy: &ExecutableStrategy,
    upload: &UploadedImage,
    options: &OcrOptions,
) -> Result<OcrOutput> {
    let upload_type = validate_upload(upload)?;
    log::info!(
        "Processing {:?} upload of {} bytes with {}",
        upload_type,
        upload.bytes.len(),
        strategy
    );

    let workspace = OcrWorkspace::create(&upload.bytes)?;
    let request = OcrRequest::new(workspace.input_path(), workspace.output_path(), options.clone());

    let result = process_ocr(strategy, &request).await;

    if let Err(e) = workspace.close() {
        log::warn!("Failed to remove OCR workspace files: {}", e);
    }
    result
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::ocr::OutputFormat;
    use crate::test_utils::{fake_virtualenv, write_script};
    use crate::KrakenError;
    use std::io::Cursor;

    fn png_upload() -> UploadedImage {
        let mut bytes = Vec::new();
        image::DynamicImage::new_rgb8(8, 8)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        UploadedImage::new(Some("page.png".to_string()), bytes)
    }

    #[tokio::test]
    async fn test_resolution_failure_prevents_invocation() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("invoked");
        let kraken = write_script(dir.path(), "kraken", &format!("touch '{}'", marker.display()));
        let request = OcrRequest::new(
            dir.path().join("in.jpg"),
            dir.path().join("out.txt"),
            OcrOptions::default(),
        );
        let strategy = ExecutableStrategy::virtualenv("kraken_env", dir.path().join("venvs"));

        let result = process_ocr(&strategy, &request).await;
        assert!(matches!(result, Err(KrakenError::EnvironmentResolution(_))));
        assert!(!marker.exists());
        assert!(kraken.exists());
    }

    #[tokio::test]
    async fn test_process_ocr_through_virtualenv() {
        let root = tempfile::tempdir().unwrap();
        let kraken = fake_virtualenv(root.path(), "kraken_env", false);
        write_script(kraken.parent().unwrap(), "kraken", r#"printf 'from venv' > "$3""#);
        let request = OcrRequest::new(
            root.path().join("in.jpg"),
            root.path().join("out.txt"),
            OcrOptions::default(),
        );
        let strategy = ExecutableStrategy::virtualenv("kraken_env", root.path());

        let output = process_ocr(&strategy, &request).await.unwrap();
        assert_eq!(output.content, "from venv");
    }

    #[tokio::test]
    async fn test_process_upload_cleans_up_on_success() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args.log");
        let kraken = write_script(
            dir.path(),
            "kraken",
            &format!(
                r#"printf '%s\n' "$@" > '{}'; printf 'recognized' > "$3""#,
                log.display()
            ),
        );
        let strategy = ExecutableStrategy::fixed(kraken.to_string_lossy());

        let output = process_upload(&strategy, &png_upload(), &OcrOptions::default())
            .await
            .unwrap();
        assert_eq!(output.content, "recognized");

        let logged = std::fs::read_to_string(&log).unwrap();
        let args: Vec<&str> = logged.lines().collect();
        assert_eq!(args.len(), 4);
        assert_eq!(args[0], "-i");
        assert!(args[1].ends_with(".jpg"));
        assert!(args[2].ends_with(".txt"));
        assert_eq!(args[3], "ocr");
        assert!(!std::path::Path::new(args[1]).exists());
        assert!(!std::path::Path::new(args[2]).exists());
    }

    #[tokio::test]
    async fn test_process_upload_cleans_up_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("args.log");
        let kraken = write_script(
            dir.path(),
            "kraken",
            &format!(
                r#"printf '%s\n' "$@" > '{}'; echo 'bad image' >&2; exit 1"#,
                log.display()
            ),
        );
        let strategy = ExecutableStrategy::fixed(kraken.to_string_lossy());
        let options = OcrOptions::new(None, false, true, OutputFormat::Json);

        let result = process_upload(&strategy, &png_upload(), &options).await;
        assert!(matches!(result, Err(KrakenError::OcrExecution { .. })));

        let logged = std::fs::read_to_string(&log).unwrap();
        let args: Vec<&str> = logged.lines().collect();
        assert_eq!(&args[4..], &["--output-format", "json"]);
        assert!(!std::path::Path::new(args[1]).exists());
        assert!(!std::path::Path::new(args[2]).exists());
    }

    #[tokio::test]
    async fn test_process_upload_rejects_non_image() {
        let upload = UploadedImage::new(Some("page.png".to_string()), b"not an image".to_vec());
        let strategy = ExecutableStrategy::fixed("kraken");
        let result = process_upload(&strategy, &upload, &OcrOptions::default()).await;
        assert!(matches!(result, Err(KrakenError::UnsupportedUpload(_))));
    }
}
