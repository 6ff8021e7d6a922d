use std::time::Duration;

use clap::Parser;
use thiserror::Error;
use url::Url;

use crate::{
    externals::user_input::trigger::TriggerDefaults,
    internals::core::system::PollFailurePolicy,
    models::temperature::{Temperature, TemperatureError},
};

/// Terminal control panel for the isave heat pump bridge.
#[derive(Parser, Debug, Clone)]
#[command(name = "isave-panel", version)]
pub struct Args {
    /// Address of the device, e.g. http://192.168.4.1
    #[arg(long, env = "ISAVE_BASE_URL", default_value = "http://192.168.4.1")]
    pub base_url: String,

    /// How often the device is polled.
    #[arg(long, env = "ISAVE_POLL_INTERVAL_MS", default_value_t = 5000)]
    pub poll_interval_ms: u64,

    /// Upper bound for every request to the device.
    #[arg(long, env = "ISAVE_REQUEST_TIMEOUT_MS", default_value_t = 3000)]
    pub request_timeout_ms: u64,

    /// How long a notification stays visible.
    #[arg(long, env = "ISAVE_NOTIFICATION_TIMEOUT_MS", default_value_t = 2000)]
    pub notification_timeout_ms: u64,

    /// Target used by `heat` when no temperature is typed.
    #[arg(long, env = "ISAVE_HEAT_TEMPERATURE", default_value_t = 22f64)]
    pub heat_temperature: f64,

    /// Target used by `isave` when no temperature is typed.
    #[arg(long, env = "ISAVE_ISAVE_TEMPERATURE", default_value_t = 10f64)]
    pub isave_temperature: f64,

    /// Keep the last values on screen when a poll fails instead of showing N/A.
    #[arg(long, env = "ISAVE_KEEP_ON_POLL_FAILURE")]
    pub keep_on_poll_failure: bool,

    /// Append plain text frames instead of redrawing a colored screen.
    #[arg(long, env = "ISAVE_NO_COLOR")]
    pub no_color: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, env = "ISAVE_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid base url '{0}'. Error: {1}")]
    InvalidBaseUrl(String, url::ParseError),

    #[error("Base url '{0}' must use http or https.")]
    UnsupportedScheme(String),

    #[error("'{0}' must be greater than zero.")]
    ZeroDuration(&'static str),

    #[error("Invalid default temperature for '{0}'. Error: {1}")]
    InvalidTemperature(&'static str, TemperatureError),
}

/// Validated settings the panel runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    pub base_url: Url,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub notification_timeout: Duration,
    pub trigger_defaults: TriggerDefaults,
    pub poll_failure_policy: PollFailurePolicy,
    pub styled: bool,
}

fn non_zero(name: &'static str, millis: u64) -> Result<Duration, ConfigError> {
    if millis == 0 {
        return Err(ConfigError::ZeroDuration(name));
    }
    Ok(Duration::from_millis(millis))
}

fn temperature(name: &'static str, value: f64) -> Result<Temperature, ConfigError> {
    Temperature::try_from(value).map_err(|e| ConfigError::InvalidTemperature(name, e))
}

impl TryFrom<&Args> for PanelConfig {
    type Error = ConfigError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let base_url = Url::parse(&args.base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(args.base_url.clone(), e))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(args.base_url.clone()));
        }

        Ok(Self {
            base_url,
            poll_interval: non_zero("poll-interval-ms", args.poll_interval_ms)?,
            request_timeout: non_zero("request-timeout-ms", args.request_timeout_ms)?,
            notification_timeout: non_zero(
                "notification-timeout-ms",
                args.notification_timeout_ms,
            )?,
            trigger_defaults: TriggerDefaults {
                heat_temperature: temperature("heat-temperature", args.heat_temperature)?,
                isave_temperature: temperature("isave-temperature", args.isave_temperature)?,
            },
            poll_failure_policy: if args.keep_on_poll_failure {
                PollFailurePolicy::Keep
            } else {
                PollFailurePolicy::Blank
            },
            styled: !args.no_color,
        })
    }
}
