use std::{sync::Arc, time::Duration};

use tokio::time::MissedTickBehavior;
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{info, trace, warn};

use crate::internals::core::system::ClientController;

/// Task: poll the device right away and then once per `period` until
/// cancelled. Each poll runs in its own task on `tracker`, so a slow poll
/// does not hold back the next tick.
#[tracing::instrument(skip_all)]
pub async fn task_poll_parameters(
    token: CancellationToken,
    controller: Arc<ClientController>,
    period: Duration,
    tracker: TaskTracker,
) {
    info!("Started. Polling every {:?}.", period);

    let mut interval = tokio::time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                warn!("Cancelled.");
                break;
            },
            _ = interval.tick() => {
                trace!("Poll tick.");
                let controller = controller.clone();
                tracker.spawn(async move { controller.refresh().await });
            }
        }
    }
}
