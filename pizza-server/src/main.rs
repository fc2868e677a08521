use pizza_server::{Config, init_logger, server};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_logger(config.log_json);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting pizza-server"
    );

    if let Err(e) = server::run(config).await {
        tracing::error!("Server error: {e}");
        return Err(e);
    }

    Ok(())
}
