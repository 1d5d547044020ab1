use std::net::{IpAddr, SocketAddr};

use vegan_cosmetics_api::{
    config::AppConfig, routes::create_app, shutdown::shutdown_signal, telemetry::init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let app = create_app();

    let addr = SocketAddr::from((config.host.parse::<IpAddr>()?, config.port));
    tracing::info!("listening on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
