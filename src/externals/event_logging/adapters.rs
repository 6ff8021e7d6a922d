use std::sync::Mutex;

use tracing::info;

use crate::{
    internals::core::ports::DisplayPort,
    models::field_view::{DisplayField, FieldView},
};

/// Logs every rendered frame as one line.
#[derive(Default)]
pub struct EventLoggingDisplay {
    pending: Mutex<Vec<(DisplayField, FieldView)>>,
}

impl EventLoggingDisplay {
    fn push(&self, field: DisplayField, view: &FieldView) {
        self.pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((field, view.clone()));
    }
}

/// `temperature=21 wifi-signal=-75(!)`
pub fn format_frame(rows: &[(DisplayField, FieldView)]) -> String {
    rows.iter()
        .map(|(field, view)| {
            if view.warning {
                format!("{}={}(!)", field, view)
            } else {
                format!("{}={}", field, view)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl DisplayPort for EventLoggingDisplay {
    fn set_external_temperature(&self, view: &FieldView) {
        self.push(DisplayField::ExternalTemperature, view);
    }

    fn set_internal_temperature(&self, view: &FieldView) {
        self.push(DisplayField::InternalTemperature, view);
    }

    fn set_wifi_signal(&self, view: &FieldView) {
        self.push(DisplayField::WifiSignal, view);
    }

    fn set_last_command(&self, view: &FieldView) {
        self.push(DisplayField::LastCommand, view);
    }

    fn flush(&self) {
        let rows = std::mem::take(
            &mut *self
                .pending
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner()),
        );
        info!("Rendered: {}", format_frame(&rows));
    }
}
