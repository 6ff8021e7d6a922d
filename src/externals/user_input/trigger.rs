use std::num::ParseFloatError;

use thiserror::Error;

use crate::models::{
    command::{CommandName, CommandNameError, CommandRequest},
    temperature::{Temperature, TemperatureError},
};

/// Temperatures used when `heat` or `isave` are given without one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerDefaults {
    pub heat_temperature: Temperature,
    pub isave_temperature: Temperature,
}

impl Default for TriggerDefaults {
    fn default() -> Self {
        Self {
            heat_temperature: Temperature { value: 22f64 },
            isave_temperature: Temperature { value: 10f64 },
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Command(CommandRequest),
    Refresh,
    Quit,
}

#[derive(Error, Debug, PartialEq)]
pub enum TriggerParseError {
    #[error("Unknown command '{0}'.")]
    Unknown(String),

    #[error("'{0}' is not a temperature.")]
    BadTemperature(String),

    #[error("Too many arguments for '{0}'.")]
    TooManyArguments(String),

    #[error("Missing command name.")]
    MissingName,
}

impl From<CommandNameError> for TriggerParseError {
    fn from(_: CommandNameError) -> Self {
        TriggerParseError::MissingName
    }
}

fn parse_temperature(raw: &str) -> Result<Temperature, TriggerParseError> {
    raw.parse::<f64>()
        .map_err(|_: ParseFloatError| TriggerParseError::BadTemperature(raw.to_string()))
        .and_then(|value| {
            Temperature::try_from(value)
                .map_err(|_: TemperatureError| TriggerParseError::BadTemperature(raw.to_string()))
        })
}

fn optional_temperature(
    keyword: &str,
    args: &[&str],
) -> Result<Option<Temperature>, TriggerParseError> {
    match args {
        [] => Ok(None),
        [raw] => parse_temperature(raw).map(Some),
        _ => Err(TriggerParseError::TooManyArguments(keyword.to_string())),
    }
}

impl Trigger {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// ```
    /// use isave_control_panel::externals::user_input::trigger::{Trigger, TriggerDefaults};
    /// let trigger = Trigger::parse("heat 24", &TriggerDefaults::default()).unwrap();
    /// assert!(matches!(trigger, Some(Trigger::Command(_))));
    /// ```
    pub fn parse(line: &str, defaults: &TriggerDefaults) -> Result<Option<Self>, TriggerParseError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((keyword, args)) = words.split_first() else {
            return Ok(None);
        };
        let keyword = keyword.to_lowercase();

        let trigger = match keyword.as_str() {
            "quit" | "exit" | "q" if args.is_empty() => Trigger::Quit,
            "refresh" | "r" if args.is_empty() => Trigger::Refresh,
            "off" if args.is_empty() => Trigger::Command(CommandRequest::off()),
            "heat" => Trigger::Command(CommandRequest::heat(
                optional_temperature(&keyword, args)?.unwrap_or(defaults.heat_temperature),
            )),
            "isave" => Trigger::Command(CommandRequest::isave(
                optional_temperature(&keyword, args)?.unwrap_or(defaults.isave_temperature),
            )),
            "raw" => match args {
                [] => return Err(TriggerParseError::MissingName),
                [name, rest @ ..] => Trigger::Command(CommandRequest::new(
                    name.parse::<CommandName>()?,
                    optional_temperature(name, rest)?,
                )),
            },
            "quit" | "exit" | "q" | "refresh" | "r" | "off" => {
                return Err(TriggerParseError::TooManyArguments(keyword.clone()))
            }
            _ => return Err(TriggerParseError::Unknown(keyword.clone())),
        };
        Ok(Some(trigger))
    }
}
