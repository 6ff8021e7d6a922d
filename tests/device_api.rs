mod common;

use std::time::Duration;

use common::{http_device, record};
use isave_control_panel::{
    externals::device_api::adapters::HttpDeviceApi,
    internals::core::ports::{DeviceApiError, DeviceApiPort},
    models::{command::CommandRequest, parameters::ParametersRecord, temperature::Temperature},
};
use serde_json::json;
use url::Url;
use wiremock::{
    matchers::{body_json, header, method, path, query_param, query_param_is_missing},
    Mock, MockServer, ResponseTemplate,
};

const TIMEOUT: Duration = Duration::from_secs(3);

#[tokio::test]
async fn test_fetch_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/parameters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "externalTemperature": 21,
            "internalTemperature": 45,
            "rssi": -50,
            "lastIrCommand": "heat22"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let parameters = http_device(&server, TIMEOUT)
        .fetch_parameters()
        .await
        .expect("Failed to fetch parameters");

    assert_eq!(parameters, record(21f64, 45f64, -50f64, "heat22"));
}

#[tokio::test]
async fn test_fetch_parameters_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/parameters"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let error = http_device(&server, TIMEOUT)
        .fetch_parameters()
        .await
        .expect_err("Expected a server failure");

    assert!(matches!(error, DeviceApiError::Server { status } if status.as_u16() == 500));
    assert_eq!(error.indicator(), "500");
    assert!(!error.is_network_or_timeout());
}

#[tokio::test]
async fn test_fetch_parameters_invalid_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/parameters"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let error = http_device(&server, TIMEOUT)
        .fetch_parameters()
        .await
        .expect_err("Expected an invalid response");

    assert!(matches!(error, DeviceApiError::InvalidResponse(_)));
    assert_eq!(error.indicator(), "invalid response");
}

#[tokio::test]
async fn test_fetch_parameters_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/parameters"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({}))
                .set_delay(Duration::from_millis(1000)),
        )
        .mount(&server)
        .await;

    let error = http_device(&server, Duration::from_millis(200))
        .fetch_parameters()
        .await
        .expect_err("Expected a timeout");

    assert!(matches!(error, DeviceApiError::Timeout));
    assert_eq!(error.indicator(), "timeout");
    assert!(error.is_network_or_timeout());
}

#[tokio::test]
async fn test_fetch_parameters_connection_refused() {
    let device = HttpDeviceApi::new(Url::parse("http://127.0.0.1:1").unwrap(), TIMEOUT)
        .expect("Failed to build http device api");

    let error = device
        .fetch_parameters()
        .await
        .expect_err("Expected a network failure");

    assert!(error.is_network_or_timeout());
}

#[tokio::test]
async fn test_send_heat_command_carries_temperature_twice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/command/heat"))
        .and(query_param("temperature", "22"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "command": "heat", "temperature": 22 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "externalTemperature": 22,
            "internalTemperature": 50,
            "rssi": -40,
            "lastIrCommand": "heat"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CommandRequest::heat(Temperature::try_from(22f64).unwrap());
    let parameters = http_device(&server, TIMEOUT)
        .send_command(&request)
        .await
        .expect("Failed to send command");

    assert_eq!(parameters, record(22f64, 50f64, -40f64, "heat"));
}

#[tokio::test]
async fn test_send_off_command_without_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/command/off"))
        .and(query_param_is_missing("temperature"))
        .and(body_json(json!({ "command": "off" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "lastIrCommand": "OFF" })))
        .expect(1)
        .mount(&server)
        .await;

    let parameters = http_device(&server, TIMEOUT)
        .send_command(&CommandRequest::off())
        .await
        .expect("Failed to send command");

    assert_eq!(
        parameters,
        ParametersRecord {
            last_ir_command: Some(String::from("OFF")),
            ..ParametersRecord::default()
        }
    );
}

#[tokio::test]
async fn test_send_command_with_zero_temperature() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/command/heat"))
        .and(query_param("temperature", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let request = CommandRequest::heat(Temperature::try_from(0f64).unwrap());
    http_device(&server, TIMEOUT)
        .send_command(&request)
        .await
        .expect("Failed to send command");
}

#[tokio::test]
async fn test_send_command_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/command/isave"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let request = CommandRequest::isave(Temperature::try_from(10f64).unwrap());
    let error = http_device(&server, TIMEOUT)
        .send_command(&request)
        .await
        .expect_err("Expected a server failure");

    assert_eq!(error.indicator(), "404");
}

#[tokio::test]
async fn test_check_health() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthcheck"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/healthcheck"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let device = http_device(&server, TIMEOUT);
    assert!(device.check_health().await.is_ok());

    let error = device
        .check_health()
        .await
        .expect_err("Expected a server failure");
    assert_eq!(error.indicator(), "503");
}
