use tokio::signal;
use tracing::info;

use udp_probe::config::ListenerConfig;
use udp_probe::listener::Listener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_target(false).init();

    let config = ListenerConfig::from_env()?;
    let mut listener = Listener::bind(&config).await?;
    info!("listening for UDP packets on {}", listener.local_addr()?);

    tokio::select! {
        result = listener.run() => result?,
        _ = signal::ctrl_c() => info!("interrupted, shutting down"),
    }
    Ok(())
}
