use shareit::gateway::{
    config::GatewayConfig,
    error::GatewayError,
    router,
    state::{setup_reqwest_client, GatewayState},
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = GatewayConfig::from_env()?;

    let state = GatewayState::new(setup_reqwest_client()?, config.server_url.clone());
    let app = router::app(state);

    let listener = TcpListener::bind(config.gateway_addr).await?;
    tracing::info!(
        "ShareIt gateway listening on {}, forwarding to {}",
        config.gateway_addr,
        config.server_url
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", err);
            }
        })
        .await?;

    Ok(())
}
