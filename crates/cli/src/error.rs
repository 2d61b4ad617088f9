//! Error types for litractl
//!
//! Library failures travel as [`DeviceError`] inside `anyhow::Error`; the
//! CLI adds its own selection and argument failures on top.

use litra::DeviceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("No Litra lights connected")]
    NoDevices,

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::DeviceNotFound(_) | CliError::NoDevices => 2,
            CliError::InvalidArgument(_) => 3,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            CliError::DeviceNotFound(_) => "device_not_found",
            CliError::NoDevices => "no_devices",
            CliError::InvalidArgument(_) => "invalid_argument",
        }
    }
}

fn device_exit_code(error: &DeviceError) -> u8 {
    if error.is_validation() {
        3
    } else if error.is_transport() {
        4
    } else {
        1
    }
}

fn device_type_name(error: &DeviceError) -> &'static str {
    match error {
        DeviceError::Unsupported => "unsupported",
        DeviceError::InvalidBrightness(_) => "invalid_brightness",
        DeviceError::InvalidTemperature(_) => "invalid_temperature",
        DeviceError::Transport(_) => "transport",
    }
}

/// Process exit code for an error that reached `main`.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    if let Some(e) = error.downcast_ref::<CliError>() {
        return e.exit_code();
    }
    error.downcast_ref::<DeviceError>().map_or(1, device_exit_code)
}

/// Short machine-readable category for JSON error output.
pub fn type_name(error: &anyhow::Error) -> &'static str {
    if let Some(e) = error.downcast_ref::<CliError>() {
        return e.type_name();
    }
    error
        .downcast_ref::<DeviceError>()
        .map_or("error", device_type_name)
}
