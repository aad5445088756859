use greeting_service::{app, RouterExt, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config: ServiceConfig = ServiceConfig::builder()
        .with_dotenv()
        .with_logging_from_env()
        .build()?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        environment = %config.environment,
        production = config.environment.is_production(),
        "Starting greeting service"
    );

    app(config.environment.clone()).serve(&config).await?;

    Ok(())
}
