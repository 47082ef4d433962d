//! Background task that keeps the provider's content fresh.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::config::MAX_REFRESH_SECS;
use crate::provider::DataProvider;
use crate::transport::Transport;

const MIN_PERIOD: Duration = Duration::from_secs(1);
const MAX_PERIOD: Duration = Duration::from_secs(MAX_REFRESH_SECS);

pub struct RefreshDaemon {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl RefreshDaemon {
    /// Refresh every `period`, the first time one period after start.
    ///
    /// `period` is clamped to between one second and one week.
    pub fn start<T: Transport + 'static>(provider: DataProvider<T>, period: Duration) -> Self {
        let clamped = period.clamp(MIN_PERIOD, MAX_PERIOD);
        if clamped != period {
            warn!(requested = ?period, used = ?clamped, "refresh period out of range");
        }
        let (shutdown, mut stop) = watch::channel(false);
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + clamped, clamped);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            info!(period = ?clamped, "refresh daemon started");
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        debug!("scheduled refresh");
                        provider.refresh().await;
                    }
                    _ = stop.changed() => break,
                }
            }
            info!("refresh daemon stopped");
        });
        Self { shutdown, handle }
    }

    /// Stop ticking and wait for an in-flight refresh to finish.
    ///
    /// Returns the task's `JoinError` if it died before being stopped.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        let _ = self.shutdown.send(true);
        self.handle.await.inspect_err(|err| {
            error!(%err, "refresh daemon task failed");
        })
    }
}
