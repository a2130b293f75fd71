use anyhow::{Context, Result};
use clap::Parser;
use kraken::common::init_logger_exe;
use kraken::config::{megabytes_to_bytes, KrakenConfig};
use kraken_web::args::ExecutableArgs;
use kraken_web::web::router;
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(version, about = "Web form for running Kraken OCR on uploaded images", long_about = None)]
struct Cli {
    #[arg(long, env = "PORT", default_value_t = 3000, help = "Port to listen on")]
    port: u16,
    #[arg(long, help = "Maximum upload size in megabytes")]
    max_upload_mb: Option<usize>,
    #[command(flatten)]
    executable: ExecutableArgs,
}

#[tokio::main]
async fn main() {
    init_logger_exe();

    if let Err(e) = run(Cli::parse()).await {
        log::error!("Server failed: {:?}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = KrakenConfig::from_env()?;
    cli.executable.apply(&mut config)?;
    if let Some(mb) = cli.max_upload_mb {
        config.max_upload_bytes = megabytes_to_bytes(mb).context("Invalid --max-upload-mb")?;
    }
    log::info!("Resolving kraken with {}", config.strategy());

    let app = router(config);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    log::info!("Attempting to bind to port {}", cli.port);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    log::info!("Successfully bound to http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
