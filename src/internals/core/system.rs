use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use crate::models::{
    command::CommandRequest, notification::ERROR_TITLE, parameters::ParametersRecord,
};

use super::{
    notifier::Notifier,
    ports::{DeviceApiPort, DisplayPort},
    render::render,
    sequencer::ResponseSequencer,
};

/// What the panel shows after a failed poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollFailurePolicy {
    /// Render the empty record, every row turns "N/A".
    #[default]
    Blank,
    /// Leave the rows at their previous values.
    Keep,
}

/// Joins the device, the display and the notification slot. Polls and
/// commands both end in `apply`, which only lets the most recently
/// dispatched response reach the display.
pub struct ClientController {
    device: Arc<dyn DeviceApiPort>,
    display: Arc<dyn DisplayPort>,
    notifier: Notifier,
    sequencer: ResponseSequencer,
    poll_failure_policy: PollFailurePolicy,
}

impl ClientController {
    pub fn new(
        device: Arc<dyn DeviceApiPort>,
        display: Arc<dyn DisplayPort>,
        notifier: Notifier,
        poll_failure_policy: PollFailurePolicy,
    ) -> Self {
        Self {
            device,
            display,
            notifier,
            sequencer: ResponseSequencer::new(),
            poll_failure_policy,
        }
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Poll the device once and render the result.
    #[instrument(skip_all)]
    pub async fn refresh(&self) {
        let ticket = self.sequencer.issue();
        match self.device.fetch_parameters().await {
            Ok(parameters) => {
                debug!("Got parameters: {}", parameters);
                self.apply(ticket, &parameters);
            }
            Err(e) => {
                warn!("Failed to fetch parameters. Error: {}", e);
                self.notifier.notify(
                    ERROR_TITLE,
                    &format!("Parameter API error {}", e.indicator()),
                );
                if self.poll_failure_policy == PollFailurePolicy::Blank {
                    self.apply(ticket, &ParametersRecord::unknown());
                }
            }
        }
    }

    /// Send one command and render the state the device answers with.
    #[instrument(skip_all, fields(command = %request))]
    pub async fn send_command(&self, request: CommandRequest) {
        let ticket = self.sequencer.issue();
        info!("Sending command.");
        match self.device.send_command(&request).await {
            Ok(parameters) => {
                debug!("Command accepted. Parameters: {}", parameters);
                self.apply(ticket, &parameters);
            }
            Err(e) => {
                warn!("Failed to send command. Error: {}", e);
                self.notifier.notify(
                    ERROR_TITLE,
                    &format!("Command API error {}", e.indicator()),
                );
            }
        }
    }

    /// Check the device health endpoint. Only reports, never blocks the panel.
    #[instrument(skip_all)]
    pub async fn check_health(&self) -> bool {
        match self.device.check_health().await {
            Ok(()) => {
                info!("Device is healthy.");
                true
            }
            Err(e) => {
                warn!("Device health check failed. Error: {}", e);
                self.notifier
                    .notify("Device unreachable", &format!("Health check {}", e.indicator()));
                false
            }
        }
    }

    fn apply(&self, ticket: u64, parameters: &ParametersRecord) {
        let display = self.display.as_ref();
        if !self
            .sequencer
            .apply_if_latest(ticket, || render(parameters, display))
        {
            debug!(
                "Dropped stale response {} (already showing {}).",
                ticket,
                self.sequencer.last_applied()
            );
        }
    }
}
