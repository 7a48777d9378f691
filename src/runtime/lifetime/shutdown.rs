use tokio::signal;
use tracing::warn;

/// 等待终止信号
pub async fn listen_for_shutdown() {
    if let Err(e) = signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        return std::future::pending().await;
    }
    warn!("Shutdown signal received, stopping evaluation server...");
}
