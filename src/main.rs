use anyhow::Result;
use tokio_util::sync::CancellationToken;

use senha_validator::config::{self, Config};
use senha_validator::server;

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before the environment is read
    let dotenv = config::load_dotenv();
    let config = Config::from_env()?;

    server::init_tracing(&config);

    match dotenv {
        Ok(Some(path)) => tracing::info!(path = %path.display(), "loaded environment file"),
        Ok(None) => tracing::debug!("no .env file found"),
        Err(err) => tracing::warn!(error = %err, "ignoring malformed .env file"),
    }

    tracing::info!(
        host = %config.host,
        port = config.port,
        log_format = %config.log_format,
        "starting senha-validator"
    );

    let shutdown = CancellationToken::new();
    tokio::spawn(server::shutdown_signal(shutdown.clone()));

    server::serve(&config, shutdown).await?;

    tracing::info!("senha-validator stopped");
    Ok(())
}
