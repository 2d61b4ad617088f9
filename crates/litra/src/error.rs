//! Error types for Litra device operations.

use litra_hid_common::HidCommonError;
use thiserror::Error;

/// Every way a Litra operation can fail.
///
/// Validation variants are returned before any report is written, so a
/// failed set never leaves the device half-updated. Transport failures are
/// never retried; a handle that returned one should be dropped and the device
/// re-discovered.
#[derive(Error, Debug)]
pub enum DeviceError {
    /// The interface is not a recognized Litra control interface.
    #[error("Device is not a supported Litra light")]
    Unsupported,

    /// Brightness outside the device's lumen range.
    #[error("Brightness {0} lm is not supported by this device")]
    InvalidBrightness(u16),

    /// Temperature outside 2700–6500 K or not a multiple of 100 K.
    #[error("Temperature {0} K is not supported (must be 2700-6500 K in steps of 100 K)")]
    InvalidTemperature(u16),

    /// Enumeration, open, write or read failure, including disconnection.
    #[error("HID transport error: {0}")]
    Transport(#[from] HidCommonError),
}

impl DeviceError {
    /// Whether the caller can recover by choosing a different value.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            DeviceError::InvalidBrightness(_) | DeviceError::InvalidTemperature(_)
        )
    }

    /// Whether the failure came from the HID transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, DeviceError::Transport(_))
    }
}

pub type DeviceResult<T> = Result<T, DeviceError>;
