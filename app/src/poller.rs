use crate::config::AppConfig;
use crate::service::DashboardService;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time;
use tracing::info;

/// Owns the repeating refresh timers. Polling is a scheduling policy of
/// the controller layer; the slices know nothing about it. Dropping or
/// stopping the poller cancels the timers; requests already in flight
/// still settle.
pub struct Poller {
    handles: Vec<JoinHandle<()>>,
}

impl Poller {
    pub fn start(service: Arc<DashboardService>, config: &AppConfig) -> Self {
        let mut handles = Vec::new();

        info!(period_secs = config.crypto_poll_secs, "starting market poll");
        let period = Duration::from_secs(config.crypto_poll_secs);
        handles.push(tokio::spawn(async move {
            let mut ticker = time::interval(period);
            loop {
                // First tick fires immediately and covers the initial load.
                ticker.tick().await;
                service.refresh_crypto_list().await;
            }
        }));

        Self { handles }
    }

    pub fn stop(self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
