use std::time::Duration;

use tokio::task::JoinHandle;

use crate::services::notification_service;

/// Background poller keeping the unread badge in sync with the server.
///
/// Fires one unread-count fetch per tick for as long as it runs; the first
/// tick happens immediately, covering the bootstrap refresh. Each fetch is
/// spawned independently, so a slow response never delays the next tick and
/// overlapping in-flight requests are allowed.
pub(crate) struct UnreadPoller {
    handle: JoinHandle<()>,
}

impl UnreadPoller {
    /// Starts polling at the given interval.
    pub fn start(context: super::AppContextHandle, interval: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(interval);
            loop {
                ticks.tick().await;
                log::debug!("Polling the server for the unread notification count");
                tokio::spawn(notification_service::handle_unread_count_request(
                    context.clone(),
                ));
            }
        });
        Self { handle }
    }

    /// Stops the poller. In-flight fetches are not aborted; only future
    /// ticks are cancelled.
    pub fn stop(self) {
        self.handle.abort();
    }
}
