use std::{io, sync::Arc};

use futures::{Stream, StreamExt};
use tokio_util::{sync::CancellationToken, task::TaskTracker};
use tracing::{debug, error, info, warn};

use crate::internals::core::system::ClientController;

use super::trigger::{Trigger, TriggerDefaults};

/// Task: read panel commands line by line and dispatch them. Commands and
/// refreshes are fire-and-forget, each runs in its own task on `tracker`.
/// `quit` cancels the session token. End of input only stops this task.
#[tracing::instrument(skip_all)]
pub async fn task_read_user_input<S>(
    token: CancellationToken,
    controller: Arc<ClientController>,
    defaults: TriggerDefaults,
    mut lines: S,
    tracker: TaskTracker,
) where
    S: Stream<Item = io::Result<String>> + Unpin,
{
    info!("Started.");

    loop {
        tokio::select! {
            _ = token.cancelled() => {
                warn!("Cancelled.");
                break;
            },
            line = lines.next() => {
                match line {
                    None => {
                        info!("Input closed. The panel keeps polling.");
                        break;
                    }
                    Some(Err(e)) => {
                        error!("Failed to read input. Error: {}", e);
                        break;
                    }
                    Some(Ok(line)) => {
                        handle_line(&line, &token, &controller, &defaults, &tracker);
                    }
                }
            }
        }
    }
}

fn handle_line(
    line: &str,
    token: &CancellationToken,
    controller: &Arc<ClientController>,
    defaults: &TriggerDefaults,
    tracker: &TaskTracker,
) {
    match Trigger::parse(line, defaults) {
        Ok(None) => {}
        Ok(Some(Trigger::Quit)) => {
            info!("Quit requested.");
            token.cancel();
        }
        Ok(Some(Trigger::Refresh)) => {
            debug!("Refresh requested.");
            let controller = controller.clone();
            tracker.spawn(async move { controller.refresh().await });
        }
        Ok(Some(Trigger::Command(request))) => {
            debug!("Dispatching {}.", request);
            let controller = controller.clone();
            tracker.spawn(async move { controller.send_command(request).await });
        }
        Err(e) => {
            warn!("Rejected input '{}'. Error: {}", line, e);
            controller.notifier().notify("Unknown command", &e.to_string());
        }
    }
}
