use std::{io, sync::Arc, time::Duration};

use futures::Stream;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::info;

use crate::{
    externals::user_input::{task::task_read_user_input, trigger::TriggerDefaults},
    internals::core::system::ClientController,
    tasks::poll_parameters::task_poll_parameters,
};

/// Owns everything that runs while the panel is on screen: the poll timer,
/// in-flight requests and the input reader. Dropping out of the session is
/// `shutdown`, which stops the timer and waits for the tasks to end.
pub struct ViewSession {
    controller: Arc<ClientController>,
    token: CancellationToken,
    tracker: TaskTracker,
}

impl ViewSession {
    /// Start polling and check the device health in the background. The
    /// session stops when `parent` is cancelled or when `shutdown` is called.
    pub fn start(
        controller: Arc<ClientController>,
        poll_period: Duration,
        parent: &CancellationToken,
    ) -> Self {
        let token = parent.child_token();
        let tracker = TaskTracker::new();

        tracker.spawn(task_poll_parameters(
            token.clone(),
            controller.clone(),
            poll_period,
            tracker.clone(),
        ));

        let health = controller.clone();
        tracker.spawn(async move {
            health.check_health().await;
        });
        info!("View session started.");

        Self {
            controller,
            token,
            tracker,
        }
    }

    /// Attach a line-based input source.
    pub fn attach_input<S>(&self, lines: S, defaults: TriggerDefaults)
    where
        S: Stream<Item = io::Result<String>> + Unpin + Send + 'static,
    {
        self.tracker.spawn(task_read_user_input(
            self.token.clone(),
            self.controller.clone(),
            defaults,
            lines,
            self.tracker.clone(),
        ));
    }

    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub async fn shutdown(self) {
        self.token.cancel();
        self.tracker.close();
        self.tracker.wait().await;
        self.controller.notifier().shutdown().await;
        info!("View session ended.");
    }
}
