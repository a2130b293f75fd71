#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadType {
    Jpeg,
    Png,
    Tiff,
}

impl UploadType {
    pub fn mime_type(&self) -> &'static str {
        match self {
            UploadType::Jpeg => "image/jpeg",
            UploadType::Png => "image/png",
            UploadType::Tiff => "image/tiff",
        }
    }
}

#[derive(Clone, Debug)]
pub struct UploadedImage {
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(file_name: Option<String>, bytes: Vec<u8>) -> Self {
        Self { file_name, bytes }
    }
}
