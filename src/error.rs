use std::fmt;

use thiserror::Error;

/// Which piece of calculator configuration a value was meant for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Setting {
    Formula,
    Unit,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Setting::Formula => f.write_str("formula"),
            Setting::Unit => f.write_str("unit"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum DistanceError {
    #[error("You have tried to set an invalid distance {setting}: {value:?}")]
    InvalidConfiguration { setting: Setting, value: String },

    #[error("Coordinate {name} must be a finite number, got {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}

impl DistanceError {
    pub(crate) fn invalid(setting: Setting, value: &str) -> Self {
        DistanceError::InvalidConfiguration {
            setting,
            value: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DistanceError>;
