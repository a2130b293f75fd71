mod types;
pub use types::{megabytes_to_bytes, ExecutableSettings, KrakenConfig, DEFAULT_MAX_UPLOAD_MB};
