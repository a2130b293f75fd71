use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::ImageFormat;

use super::types::{UploadType, UploadedImage};
use crate::{KrakenError, Result};

pub fn get_upload_type(file_name: &str) -> Result<UploadType> {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(std::ffi::OsStr::to_str)
        .ok_or_else(|| {
            KrakenError::UnsupportedUpload(format!("missing file extension: {}", file_name))
        })?;

    match extension.to_lowercase().as_str() {
        "jpg" | "jpeg" => Ok(UploadType::Jpeg),
        "png" => Ok(UploadType::Png),
        "tiff" => Ok(UploadType::Tiff),
        ext => Err(KrakenError::UnsupportedUpload(format!("unsupported file extension: {}", ext))),
    }
}

/// Checks the file name (when there is one) and the magic bytes. The bytes
/// decide the type.
pub fn validate_upload(upload: &UploadedImage) -> Result<UploadType> {
    if upload.bytes.is_empty() {
        return Err(KrakenError::UnsupportedUpload("empty upload".to_string()));
    }
    if let Some(name) = upload.file_name.as_deref().filter(|n| !n.is_empty()) {
        get_upload_type(name)?;
    }

    match image::guess_format(&upload.bytes) {
        Ok(ImageFormat::Jpeg) => Ok(UploadType::Jpeg),
        Ok(ImageFormat::Png) => Ok(UploadType::Png),
        Ok(ImageFormat::Tiff) => Ok(UploadType::Tiff),
        Ok(other) => Err(KrakenError::UnsupportedUpload(format!(
            "unsupported image format: {:?}",
            other
        ))),
        Err(_) => Err(KrakenError::UnsupportedUpload("not an image".to_string())),
    }
}

/// Decodes a base64 image, with or without a `data:image/...;base64,` prefix.
pub fn decode_base64_image(data: &str) -> Result<Vec<u8>> {
    let base64_part = match data.split_once(',') {
        Some((_, part)) => part,
        None => data,
    };

    STANDARD
        .decode(base64_part.trim())
        .map_err(|e| KrakenError::InvalidRequest(format!("Failed to decode base64 data: {}", e)))
}
