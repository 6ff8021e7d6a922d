use std::{fmt::Display, str::FromStr};

use serde::Serialize;
use thiserror::Error;

use super::temperature::Temperature;

/// Command names understood by the device. The vocabulary is owned by the
/// firmware, so names the client has no variant for are passed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandName {
    Off,
    Heat,
    ISave,
    Other(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum CommandNameError {
    #[error("Command name can't be empty.")]
    Empty,
}

impl CommandName {
    pub fn as_str(&self) -> &str {
        match self {
            CommandName::Off => "off",
            CommandName::Heat => "heat",
            CommandName::ISave => "isave",
            CommandName::Other(name) => name.as_str(),
        }
    }
}

impl FromStr for CommandName {
    type Err = CommandNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name {
            "" => Err(CommandNameError::Empty),
            "off" => Ok(CommandName::Off),
            "heat" => Ok(CommandName::Heat),
            "isave" => Ok(CommandName::ISave),
            other => Ok(CommandName::Other(other.to_string())),
        }
    }
}

impl Display for CommandName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single command for the device. Whether a command needs a temperature is
/// up to the device; nothing here enforces the pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandRequest {
    pub command: CommandName,
    pub temperature: Option<Temperature>,
}

/// JSON body posted to `/api/command/{command}`.
#[derive(Serialize, Debug, PartialEq)]
pub struct CommandBody<'a> {
    pub command: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
}

impl CommandRequest {
    pub fn new(command: CommandName, temperature: Option<Temperature>) -> Self {
        Self {
            command,
            temperature,
        }
    }

    pub fn off() -> Self {
        Self::new(CommandName::Off, None)
    }

    pub fn heat(temperature: Temperature) -> Self {
        Self::new(CommandName::Heat, Some(temperature))
    }

    pub fn isave(temperature: Temperature) -> Self {
        Self::new(CommandName::ISave, Some(temperature))
    }

    pub fn body(&self) -> CommandBody<'_> {
        CommandBody {
            command: self.command.as_str(),
            temperature: self.temperature,
        }
    }
}

impl Display for CommandRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.temperature {
            Some(temperature) => write!(f, "<Command | {} @ {}C>", self.command, temperature),
            None => write!(f, "<Command | {}>", self.command),
        }
    }
}
