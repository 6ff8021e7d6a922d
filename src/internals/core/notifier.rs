use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{debug, instrument, trace};

use super::ports::NotificationPort;

pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(2000);

/// Shows notifications on a `NotificationPort` and hides them again after a
/// timeout. Only the most recent notification owns the pending hide: showing
/// a new one cancels the hide scheduled by the previous one.
pub struct Notifier {
    port: Arc<dyn NotificationPort>,
    default_timeout: Duration,
    pending_hide: Arc<Mutex<CancellationToken>>,
    tasks: TaskTracker,
}

impl Notifier {
    pub fn new(port: Arc<dyn NotificationPort>, default_timeout: Duration) -> Self {
        Self {
            port,
            default_timeout,
            pending_hide: Arc::new(Mutex::new(CancellationToken::new())),
            tasks: TaskTracker::new(),
        }
    }

    /// Show a notification for the default timeout.
    pub fn notify(&self, title: &str, body: &str) {
        self.notify_for(title, body, self.default_timeout);
    }

    /// Show a notification and schedule its hide. Must run inside a tokio
    /// runtime.
    #[instrument(skip(self))]
    pub fn notify_for(&self, title: &str, body: &str, timeout: Duration) {
        let hide_token = CancellationToken::new();
        {
            let mut pending = self
                .pending_hide
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            pending.cancel();
            *pending = hide_token.clone();
            self.port.show(title, body);
        }
        debug!("Showing notification.");

        let port = self.port.clone();
        let pending_hide = self.pending_hide.clone();
        self.tasks.spawn(async move {
            tokio::select! {
                _ = hide_token.cancelled() => {
                    trace!("Hide superseded by a newer notification.");
                },
                _ = tokio::time::sleep(timeout) => {
                    let _pending = pending_hide
                        .lock()
                        .unwrap_or_else(|poisoned| poisoned.into_inner());
                    if !hide_token.is_cancelled() {
                        port.hide();
                        trace!("Notification hidden.");
                    }
                }
            }
        });
    }

    /// Drop any pending hide and wait for the hide tasks to finish.
    pub async fn shutdown(&self) {
        self.pending_hide
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .cancel();
        self.tasks.close();
        self.tasks.wait().await;
    }
}
