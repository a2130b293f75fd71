use clap::Parser;
use kraken::common::init_logger_exe;
use kraken::config::KrakenConfig;
use kraken_web::ocr_cli::{failure_message, run_ocr_cli, OcrCli};

#[tokio::main]
async fn main() {
    init_logger_exe();

    let result = match KrakenConfig::from_env() {
        Ok(config) => run_ocr_cli(OcrCli::parse(), config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(content) => println!("{}", content),
        Err(e) => {
            log::error!("{}", failure_message(&e));
            std::process::exit(1);
        }
    }
}
