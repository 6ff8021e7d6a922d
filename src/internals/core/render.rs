use crate::models::{
    field_view::{FieldView, PanelFrame},
    parameters::ParametersRecord,
};

use super::ports::DisplayPort;

pub const NOT_AVAILABLE: &str = "N/A";

const EXTERNAL_TEMPERATURE_MAX: f64 = 25f64;
const EXTERNAL_TEMPERATURE_MIN: f64 = 10f64;
const INTERNAL_TEMPERATURE_MAX: f64 = 60f64;
const RSSI_MIN: f64 = -60f64;

/// Zero counts as unreported: the firmware holds 0 until its first reading.
fn is_unreported(value: Option<f64>) -> bool {
    value.map_or(true, |v| v == 0f64)
}

fn numeric_view(value: Option<f64>, out_of_range: impl Fn(f64) -> bool) -> FieldView {
    FieldView {
        text: value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| v.to_string()),
        warning: is_unreported(value) || value.map_or(false, out_of_range),
    }
}

fn text_view(value: Option<&str>) -> FieldView {
    match value.filter(|v| !v.is_empty()) {
        Some(v) => FieldView {
            text: v.to_string(),
            warning: false,
        },
        None => FieldView {
            text: NOT_AVAILABLE.to_string(),
            warning: true,
        },
    }
}

/// Map a parameters record to the four panel rows.
pub fn generate_panel_frame(parameters: &ParametersRecord) -> PanelFrame {
    PanelFrame {
        external_temperature: numeric_view(parameters.external_temperature, |t| {
            t > EXTERNAL_TEMPERATURE_MAX || t < EXTERNAL_TEMPERATURE_MIN
        }),
        internal_temperature: numeric_view(parameters.internal_temperature, |t| {
            t > INTERNAL_TEMPERATURE_MAX
        }),
        wifi_signal: numeric_view(parameters.rssi, |rssi| rssi < RSSI_MIN),
        last_command: text_view(parameters.last_ir_command.as_deref()),
    }
}

/// Write a frame to the display. Touches nothing but the four rows.
pub fn write_panel_frame(frame: &PanelFrame, display: &dyn DisplayPort) {
    display.set_external_temperature(&frame.external_temperature);
    display.set_internal_temperature(&frame.internal_temperature);
    display.set_wifi_signal(&frame.wifi_signal);
    display.set_last_command(&frame.last_command);
    display.flush();
}

pub fn render(parameters: &ParametersRecord, display: &dyn DisplayPort) {
    write_panel_frame(&generate_panel_frame(parameters), display);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(external: f64, internal: f64, rssi: f64, last: &str) -> ParametersRecord {
        ParametersRecord {
            external_temperature: Some(external),
            internal_temperature: Some(internal),
            rssi: Some(rssi),
            last_ir_command: Some(last.to_string()),
        }
    }

    #[test]
    fn test_nominal_record_has_no_warnings() {
        let frame = generate_panel_frame(&record(21f64, 45f64, -50f64, "heat22"));

        assert_eq!(frame.external_temperature.text, "21");
        assert_eq!(frame.internal_temperature.text, "45");
        assert_eq!(frame.wifi_signal.text, "-50");
        assert_eq!(frame.last_command.text, "heat22");
        assert_eq!(frame.warning_count(), 0);
    }

    #[test]
    fn test_unknown_record_is_all_warnings() {
        let frame = generate_panel_frame(&ParametersRecord::unknown());

        assert_eq!(frame.external_temperature.text, NOT_AVAILABLE);
        assert_eq!(frame.internal_temperature.text, NOT_AVAILABLE);
        assert_eq!(frame.wifi_signal.text, NOT_AVAILABLE);
        assert_eq!(frame.last_command.text, NOT_AVAILABLE);
        assert_eq!(frame.warning_count(), 4);
    }

    #[test]
    fn test_external_temperature_bounds() {
        let warns = |t: f64| {
            generate_panel_frame(&record(t, 45f64, -50f64, "OFF"))
                .external_temperature
                .warning
        };

        assert!(!warns(25f64));
        assert!(warns(25.0001f64));
        assert!(!warns(10f64));
        assert!(warns(9.999f64));
    }

    #[test]
    fn test_internal_temperature_bounds() {
        let warns = |t: f64| {
            generate_panel_frame(&record(21f64, t, -50f64, "OFF"))
                .internal_temperature
                .warning
        };

        assert!(!warns(60f64));
        assert!(warns(60.0001f64));
        assert!(!warns(-5f64));
    }

    #[test]
    fn test_rssi_bounds() {
        let warns = |rssi: f64| {
            generate_panel_frame(&record(21f64, 45f64, rssi, "OFF"))
                .wifi_signal
                .warning
        };

        assert!(!warns(-60f64));
        assert!(warns(-60.0001f64));
    }

    #[test]
    fn test_zero_is_shown_but_warned() {
        let frame = generate_panel_frame(&record(0f64, 0f64, 0f64, ""));

        assert_eq!(frame.internal_temperature.text, "0");
        assert!(frame.internal_temperature.warning);
        assert_eq!(frame.wifi_signal.text, "0");
        assert!(frame.wifi_signal.warning);
        assert_eq!(frame.last_command.text, NOT_AVAILABLE);
        assert!(frame.last_command.warning);
    }

    #[test]
    fn test_fractional_values_keep_precision() {
        let frame = generate_panel_frame(&record(21.5f64, 45.25f64, -50f64, "OFF"));
        assert_eq!(frame.external_temperature.text, "21.5");
        assert_eq!(frame.internal_temperature.text, "45.25");
    }

    #[test]
    fn test_frame_generation_is_deterministic() {
        let parameters = record(30f64, 61f64, -70f64, "ISAVE 10C");
        assert_eq!(
            generate_panel_frame(&parameters),
            generate_panel_frame(&parameters)
        );
    }
}
