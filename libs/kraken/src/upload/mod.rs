mod types;
pub use types::{UploadType, UploadedImage};

mod utils;
pub use utils::{decode_base64_image, get_upload_type, validate_upload};

mod workspace;
pub use workspace::OcrWorkspace;
