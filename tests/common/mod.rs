#![allow(dead_code)]

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use isave_control_panel::{
    externals::{device_api::adapters::HttpDeviceApi, terminal::adapters::TerminalPanel},
    internals::core::{
        notifier::{Notifier, DEFAULT_NOTIFICATION_TIMEOUT},
        ports::{DeviceApiError, DeviceApiPort},
        system::{ClientController, PollFailurePolicy},
    },
    models::{command::CommandRequest, parameters::ParametersRecord},
};
use url::Url;
use wiremock::MockServer;

pub type TestPanel = TerminalPanel<Vec<u8>>;

pub fn panel() -> Arc<TestPanel> {
    Arc::new(TerminalPanel::new(Vec::new(), false))
}

pub fn controller(
    device: Arc<dyn DeviceApiPort>,
    panel: &Arc<TestPanel>,
    policy: PollFailurePolicy,
) -> Arc<ClientController> {
    Arc::new(ClientController::new(
        device,
        panel.clone(),
        Notifier::new(panel.clone(), DEFAULT_NOTIFICATION_TIMEOUT),
        policy,
    ))
}

pub fn http_device(server: &MockServer, timeout: Duration) -> HttpDeviceApi {
    HttpDeviceApi::new(
        Url::parse(&server.uri()).expect("Failed to parse mock server uri"),
        timeout,
    )
    .expect("Failed to build http device api")
}

pub fn record(external: f64, internal: f64, rssi: f64, last: &str) -> ParametersRecord {
    ParametersRecord {
        external_temperature: Some(external),
        internal_temperature: Some(internal),
        rssi: Some(rssi),
        last_ir_command: Some(last.to_string()),
    }
}

/// In-memory device. Polls answer with `poll_record` after `poll_delay`,
/// commands answer with `command_record` after `command_delay`, health checks
/// succeed after `health_delay`.
pub struct FakeDevice {
    pub poll_record: Mutex<ParametersRecord>,
    pub command_record: ParametersRecord,
    pub poll_delay: Duration,
    pub command_delay: Duration,
    pub health_delay: Duration,
    pub health_checks: AtomicUsize,
    pub polls_started: AtomicUsize,
    pub commands: Mutex<Vec<CommandRequest>>,
}

impl FakeDevice {
    pub fn new(poll_record: ParametersRecord, command_record: ParametersRecord) -> Self {
        Self {
            poll_record: Mutex::new(poll_record),
            command_record,
            poll_delay: Duration::ZERO,
            command_delay: Duration::ZERO,
            health_delay: Duration::ZERO,
            health_checks: AtomicUsize::new(0),
            polls_started: AtomicUsize::new(0),
            commands: Mutex::new(vec![]),
        }
    }

    pub fn polls(&self) -> usize {
        self.polls_started.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceApiPort for FakeDevice {
    async fn fetch_parameters(&self) -> Result<ParametersRecord, DeviceApiError> {
        self.polls_started.fetch_add(1, Ordering::SeqCst);
        let record = self.poll_record.lock().unwrap().clone();
        tokio::time::sleep(self.poll_delay).await;
        Ok(record)
    }

    async fn send_command(
        &self,
        request: &CommandRequest,
    ) -> Result<ParametersRecord, DeviceApiError> {
        self.commands.lock().unwrap().push(request.clone());
        tokio::time::sleep(self.command_delay).await;
        Ok(self.command_record.clone())
    }

    async fn check_health(&self) -> Result<(), DeviceApiError> {
        self.health_checks.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.health_delay).await;
        Ok(())
    }
}
