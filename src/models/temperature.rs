use std::fmt::Display;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Whole numbers up to this magnitude serialize as JSON integers.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992f64;

/// Target temperature in degC sent along with a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Temperature {
    pub value: f64,
}

#[derive(Error, Debug, PartialEq)]
pub enum TemperatureError {
    /// JSON has no representation for NaN or infinity.
    #[error("Temperature must be a finite number")]
    NotFinite,
}

impl TryFrom<f64> for Temperature {
    type Error = TemperatureError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(TemperatureError::NotFinite);
        }
        Ok(Temperature { value })
    }
}

/// `22` goes out as `22`, `21.5` as `21.5`.
impl Serialize for Temperature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.value.fract() == 0f64 && self.value.abs() <= MAX_EXACT_INTEGER {
            serializer.serialize_i64(self.value as i64)
        } else {
            serializer.serialize_f64(self.value)
        }
    }
}

impl Display for Temperature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
