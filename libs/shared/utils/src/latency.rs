use std::time::Duration;
use tracing::trace;

/// Stand-in for network round-trip time on mock services.
pub async fn simulate_latency(latency_ms: u64) {
    if latency_ms == 0 {
        return;
    }

    trace!("Simulating {}ms of service latency", latency_ms);
    tokio::time::sleep(Duration::from_millis(latency_ms)).await;
}
