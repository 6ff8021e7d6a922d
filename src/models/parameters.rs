use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Snapshot of the device status as reported by `/api/parameters` or by a
/// command response. Every field is optional: an absent key and `null` both
/// mean the device has nothing to report for it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParametersRecord {
    /// Sensor temperature in degC.
    #[serde(default)]
    pub external_temperature: Option<f64>,

    /// Controller board temperature in degC.
    #[serde(default)]
    pub internal_temperature: Option<f64>,

    /// Wifi signal strength in dBm.
    #[serde(default)]
    pub rssi: Option<f64>,

    /// Last infrared command the device accepted, e.g. `HEAT 22C`.
    #[serde(default)]
    pub last_ir_command: Option<String>,
}

impl ParametersRecord {
    /// The record a failed poll degrades to.
    pub fn unknown() -> Self {
        Self::default()
    }
}

impl Display for ParametersRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(Parameters: external={:?}, internal={:?}, rssi={:?}, last_command={:?})",
            self.external_temperature,
            self.internal_temperature,
            self.rssi,
            self.last_ir_command
        )
    }
}
