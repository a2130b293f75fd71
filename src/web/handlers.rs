use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};
use kraken::ocr::OcrOptions;
use kraken::process::process_upload;
use kraken::upload::{decode_base64_image, UploadedImage};
use kraken::KrakenError;

use super::error::{status_for, user_message};
use super::page::{image_data_url, render_error, render_index, render_result};
use super::types::{Base64OcrRequest, ProcessResponse};
use super::AppState;

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn ocr_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Html<String>) {
    let (upload, options) = match read_ocr_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            log::error!("Invalid OCR form: {}", err);
            return (status_for(&err), Html(render_error(&user_message(&err), None)));
        }
    };
    let preview = image_data_url(&upload);

    match process_upload(&state.config.strategy(), &upload, &options).await {
        Ok(output) => (StatusCode::OK, Html(render_result(&output, preview.as_deref()))),
        Err(err) => {
            log::error!("OCR failed: {}", err);
            (status_for(&err), Html(render_error(&user_message(&err), preview.as_deref())))
        }
    }
}

pub async fn ocr_api(
    State(state): State<AppState>,
    multipart: Multipart,
) -> (StatusCode, Json<ProcessResponse>) {
    let result = match read_ocr_form(multipart).await {
        Ok((upload, options)) => process_upload(&state.config.strategy(), &upload, &options).await,
        Err(err) => Err(err),
    };
    respond_json(result)
}

pub async fn ocr_base64(
    State(state): State<AppState>,
    Json(payload): Json<Base64OcrRequest>,
) -> (StatusCode, Json<ProcessResponse>) {
    log::info!("Processing base64 image data");
    let result = match decode_base64_image(&payload.image) {
        Ok(bytes) => {
            log::info!("Successfully decoded {} bytes of image data", bytes.len());
            let upload = UploadedImage::new(payload.file_name, bytes);
            process_upload(&state.config.strategy(), &upload, &payload.options).await
        }
        Err(err) => Err(err),
    };
    respond_json(result)
}

fn respond_json(
    result: kraken::Result<kraken::ocr::OcrOutput>,
) -> (StatusCode, Json<ProcessResponse>) {
    match result {
        Ok(output) => (StatusCode::OK, Json(ProcessResponse::ok(output))),
        Err(err) => {
            log::error!("OCR request failed: {}", err);
            (status_for(&err), Json(ProcessResponse::failed(user_message(&err))))
        }
    }
}

/// Reads the `image` file plus the option fields. Unchecked checkboxes are
/// simply absent; the binarization checkbox is preceded by a hidden `off`
/// field, so the last value wins.
async fn read_ocr_form(mut multipart: Multipart) -> kraken::Result<(UploadedImage, OcrOptions)> {
    let mut image = None;
    let mut options = OcrOptions::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| KrakenError::InvalidRequest(format!("Failed to read upload: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name == "image" {
            let file_name = field.file_name().map(|s| s.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| KrakenError::InvalidRequest(format!("Failed to read image: {}", e)))?;
            log::debug!("Received image {:?}, {} bytes", file_name, bytes.len());
            image = Some(UploadedImage::new(file_name, bytes.to_vec()));
            continue;
        }

        let value = field.text().await.map_err(|e| {
            KrakenError::InvalidRequest(format!("Failed to read field {}: {}", name, e))
        })?;
        match name.as_str() {
            "custom_model_path" => {
                options.custom_model_path = Some(value).filter(|m| !m.is_empty())
            }
            "layout_analysis" => options.layout_analysis = parse_flag(&name, &value)?,
            "binarization" => options.binarization = parse_flag(&name, &value)?,
            "output_format" => {
                options.output_format = value
                    .parse()
                    .map_err(|e: anyhow::Error| KrakenError::InvalidRequest(e.to_string()))?
            }
            other => log::debug!("Ignoring form field {}", other),
        }
    }

    let image =
        image.ok_or_else(|| KrakenError::InvalidRequest("No image field found".to_string()))?;
    Ok((image, options))
}

fn parse_flag(name: &str, value: &str) -> kraken::Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" | "" => Ok(false),
        other => Err(KrakenError::InvalidRequest(format!("Invalid value for {}: {}", name, other))),
    }
}
