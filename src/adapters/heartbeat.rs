//! Keep-alive self-ping task.
//!
//! Periodically issues a GET against the service's own public address so
//! free-tier hosts do not idle the process out. The task shares no state
//! with the request path; its failures are logged and discarded.

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Spawn the heartbeat loop.
///
/// The first ping fires immediately, then every `interval`. The returned
/// handle can be aborted on shutdown.
pub fn spawn_heartbeat(target_url: String, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let client = match reqwest::Client::builder().build() {
            Ok(client) => client,
            Err(e) => {
                tracing::warn!(error = %e, "heartbeat disabled: could not build HTTP client");
                return;
            }
        };

        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            tracing::debug!(target = %target_url, "pinging self to keep service alive");
            match client.get(&target_url).send().await {
                Ok(response) => {
                    tracing::debug!(status = %response.status(), "heartbeat ping completed");
                }
                Err(e) => {
                    // Transient network errors never surface to any client.
                    tracing::warn!(error = %e, "heartbeat ping failed");
                }
            }
        }
    })
}
