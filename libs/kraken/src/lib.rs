pub mod common;
pub mod config;
pub mod error;
pub mod executable;
pub mod ocr;
pub mod process;
pub mod upload;

#[cfg(all(test, unix))]
pub(crate) mod test_utils;

pub use error::{KrakenError, Result};
