//! Common HID transport utilities for Litra lights
//!
//! This crate provides the blocking transport seam the `litra` crate talks
//! through: interface metadata, the [`HidDevice`] / [`HidPort`] traits, an
//! implementation over `hidapi`, and an in-memory mock for tests.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod device_info;
pub mod hid_traits;
pub mod hidapi_port;

pub use device_info::*;
pub use hid_traits::*;
pub use hidapi_port::{HidApiDevice, HidApiPort};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HidCommonError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Failed to enumerate HID devices: {0}")]
    Enumeration(String),

    #[error("Failed to open device: {0}")]
    OpenError(String),

    #[error("Failed to read from device: {0}")]
    ReadError(String),

    #[error("Failed to write to device: {0}")]
    WriteError(String),

    #[error("Invalid report format: {0}")]
    InvalidReport(String),

    #[error("Device disconnected")]
    Disconnected,
}

pub type HidCommonResult<T> = Result<T, HidCommonError>;
