mod types;
pub use types::{OcrOptions, OcrOutput, OcrRequest, OcrResult, OutputFormat};

mod command;
pub use command::build_command_args;

mod invoker;
pub use invoker::{execute_command, run_ocr};
