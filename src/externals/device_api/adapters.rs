use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use thiserror::Error;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::{
    internals::core::ports::{DeviceApiError, DeviceApiPort},
    models::{command::CommandRequest, parameters::ParametersRecord},
};

const PARAMETERS_PATH: [&str; 2] = ["api", "parameters"];
const COMMAND_PATH: [&str; 2] = ["api", "command"];
const HEALTHCHECK_PATH: [&str; 1] = ["healthcheck"];

#[derive(Error, Debug)]
pub enum HttpDeviceApiError {
    #[error("Base url '{0}' can't carry a path.")]
    InvalidBaseUrl(Url),

    #[error("Failed to build http client. Error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Talks to the thermostat firmware over its JSON http api. Every request is
/// bounded by one timeout covering connect, send and body.
pub struct HttpDeviceApi {
    client: Client,
    base_url: Url,
}

impl HttpDeviceApi {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, HttpDeviceApiError> {
        if base_url.cannot_be_a_base() {
            return Err(HttpDeviceApiError::InvalidBaseUrl(base_url));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn map_transport_error(e: reqwest::Error) -> DeviceApiError {
    if e.is_timeout() {
        DeviceApiError::Timeout
    } else {
        DeviceApiError::Network(e)
    }
}

/// Turn a response into a parameters record: non-success statuses are
/// server failures, undecodable bodies are invalid responses.
async fn read_parameters(response: Response) -> Result<ParametersRecord, DeviceApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(DeviceApiError::Server { status });
    }
    let body = response.bytes().await.map_err(map_transport_error)?;
    trace!("Received {} bytes.", body.len());
    serde_json::from_slice(&body).map_err(|e| DeviceApiError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl DeviceApiPort for HttpDeviceApi {
    #[instrument(skip_all)]
    async fn fetch_parameters(&self) -> Result<ParametersRecord, DeviceApiError> {
        let url = self.endpoint(PARAMETERS_PATH);
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        read_parameters(response).await
    }

    #[instrument(skip_all)]
    async fn send_command(
        &self,
        request: &CommandRequest,
    ) -> Result<ParametersRecord, DeviceApiError> {
        let url = self.endpoint(COMMAND_PATH.into_iter().chain([request.command.as_str()]));
        debug!("POST {} {}", url, request);

        let mut builder = self.client.post(url).json(&request.body());
        if let Some(temperature) = request.temperature {
            builder = builder.query(&[("temperature", temperature.to_string())]);
        }
        let response = builder.send().await.map_err(map_transport_error)?;
        read_parameters(response).await
    }

    #[instrument(skip_all)]
    async fn check_health(&self) -> Result<(), DeviceApiError> {
        let url = self.endpoint(HEALTHCHECK_PATH);
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeviceApiError::Server { status });
        }
        Ok(())
    }
}
