pub mod args;
pub mod ocr_cli;
pub mod web;
