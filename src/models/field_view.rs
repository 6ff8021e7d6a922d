use derive_more::Display;

/// Text plus warning flag for one panel row.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display(fmt = "{}", text)]
pub struct FieldView {
    pub text: String,
    pub warning: bool,
}

/// Rows of the panel, named after the slots of the device's web page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DisplayField {
    #[display(fmt = "temperature")]
    ExternalTemperature,
    #[display(fmt = "internal-temperature")]
    InternalTemperature,
    #[display(fmt = "wifi-signal")]
    WifiSignal,
    #[display(fmt = "last-command")]
    LastCommand,
}

impl DisplayField {
    pub const ALL: [DisplayField; 4] = [
        DisplayField::ExternalTemperature,
        DisplayField::InternalTemperature,
        DisplayField::WifiSignal,
        DisplayField::LastCommand,
    ];

    /// Human readable row label.
    pub fn label(&self) -> &'static str {
        match self {
            DisplayField::ExternalTemperature => "Temperature",
            DisplayField::InternalTemperature => "Internal temperature",
            DisplayField::WifiSignal => "WiFi signal",
            DisplayField::LastCommand => "Last command",
        }
    }
}

/// All four rows derived from one parameters record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelFrame {
    pub external_temperature: FieldView,
    pub internal_temperature: FieldView,
    pub wifi_signal: FieldView,
    pub last_command: FieldView,
}

impl PanelFrame {
    pub fn get(&self, field: DisplayField) -> &FieldView {
        match field {
            DisplayField::ExternalTemperature => &self.external_temperature,
            DisplayField::InternalTemperature => &self.internal_temperature,
            DisplayField::WifiSignal => &self.wifi_signal,
            DisplayField::LastCommand => &self.last_command,
        }
    }

    pub fn warning_count(&self) -> usize {
        DisplayField::ALL
            .iter()
            .filter(|field| self.get(**field).warning)
            .count()
    }
}
