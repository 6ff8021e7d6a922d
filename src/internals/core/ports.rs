use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::models::{
    command::CommandRequest, field_view::FieldView, parameters::ParametersRecord,
};

#[derive(Error, Debug)]
pub enum DeviceApiError {
    /// The request did not complete within the configured timeout.
    #[error("Request timed out.")]
    Timeout,

    /// The connection failed before a response arrived.
    #[error("Failed to reach device. Error: {0}")]
    Network(#[source] reqwest::Error),

    /// The device answered with a non-success status.
    #[error("Device answered with status {status}.")]
    Server { status: StatusCode },

    /// A success status whose body is not a parameters record.
    #[error("Failed to parse device response. Error: {0}")]
    InvalidResponse(String),
}

impl DeviceApiError {
    /// Short marker appended to notification bodies: the status code when
    /// the device answered, otherwise what went wrong.
    pub fn indicator(&self) -> String {
        match self {
            DeviceApiError::Timeout => String::from("timeout"),
            DeviceApiError::Network(_) => String::from("network error"),
            DeviceApiError::Server { status } => status.as_u16().to_string(),
            DeviceApiError::InvalidResponse(_) => String::from("invalid response"),
        }
    }

    pub fn is_network_or_timeout(&self) -> bool {
        matches!(self, DeviceApiError::Timeout | DeviceApiError::Network(_))
    }
}

/// The remote thermostat.
#[async_trait]
pub trait DeviceApiPort: Send + Sync {
    async fn fetch_parameters(&self) -> Result<ParametersRecord, DeviceApiError>;

    async fn send_command(
        &self,
        request: &CommandRequest,
    ) -> Result<ParametersRecord, DeviceApiError>;

    async fn check_health(&self) -> Result<(), DeviceApiError>;
}

/// The four rows of the panel. One setter per row.
pub trait DisplayPort: Send + Sync {
    fn set_external_temperature(&self, view: &FieldView);
    fn set_internal_temperature(&self, view: &FieldView);
    fn set_wifi_signal(&self, view: &FieldView);
    fn set_last_command(&self, view: &FieldView);

    /// Called once after all four rows of a frame are set.
    fn flush(&self) {}
}

/// The notification slot of the panel.
pub trait NotificationPort: Send + Sync {
    fn show(&self, title: &str, body: &str);
    fn hide(&self);
}

/// Fans every frame out to several displays.
pub type MultiDisplay = Vec<Arc<dyn DisplayPort>>;

impl DisplayPort for MultiDisplay {
    fn set_external_temperature(&self, view: &FieldView) {
        self.iter().for_each(|port| port.set_external_temperature(view));
    }

    fn set_internal_temperature(&self, view: &FieldView) {
        self.iter().for_each(|port| port.set_internal_temperature(view));
    }

    fn set_wifi_signal(&self, view: &FieldView) {
        self.iter().for_each(|port| port.set_wifi_signal(view));
    }

    fn set_last_command(&self, view: &FieldView) {
        self.iter().for_each(|port| port.set_last_command(view));
    }

    fn flush(&self) {
        self.iter().for_each(|port| port.flush());
    }
}
