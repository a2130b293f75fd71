mod utils;
pub use utils::{process_ocr, process_upload};
