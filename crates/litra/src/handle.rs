//! Typed get/set operations on an opened Litra light.

use core::fmt;

use litra_hid_common::{HidCommonError, HidDevice};
use litra_hid_protocol::{
    DeviceType, MAX_TEMPERATURE_IN_KELVIN, MIN_TEMPERATURE_IN_KELVIN, RESPONSE_LEN, Report,
    build_get_brightness_report, build_get_power_report, build_get_temperature_report,
    build_set_brightness_report, build_set_power_report, build_set_temperature_report,
    parse_power_response, parse_value_response,
};
use tracing::{debug, trace};

use crate::error::{DeviceError, DeviceResult};

/// A live session with one Litra light.
///
/// Every call is an independent request/response exchange: at most one
/// report written and at most one read. Operations take `&mut self`, so a
/// handle shared between threads has to sit behind a lock, which keeps each
/// write paired with its own read.
///
/// The device is the only source of truth; nothing is cached here. After a
/// [`DeviceError::Transport`] the handle should be dropped and the light
/// found again.
pub struct DeviceHandle {
    connection: Box<dyn HidDevice>,
    device_type: DeviceType,
}

impl DeviceHandle {
    /// Wrap an already-open connection to a light of `device_type`.
    pub fn new(connection: Box<dyn HidDevice>, device_type: DeviceType) -> Self {
        Self {
            connection,
            device_type,
        }
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Serial number from the descriptor this light was opened with. Does no
    /// I/O; `None` is a valid answer.
    pub fn serial_number(&self) -> DeviceResult<Option<String>> {
        Ok(self.connection.serial_number()?)
    }

    pub fn is_on(&mut self) -> DeviceResult<bool> {
        let response = self.query(build_get_power_report(self.device_type))?;
        let on = parse_power_response(&response).ok_or_else(short_response)?;
        debug!(device_type = %self.device_type, on, "read power state");
        Ok(on)
    }

    /// Switch the light on or off.
    ///
    /// The firmware does not acknowledge the command; call [`Self::is_on`]
    /// afterwards if confirmation is needed.
    pub fn set_on(&mut self, on: bool) -> DeviceResult<()> {
        debug!(device_type = %self.device_type, on, "set power state");
        self.send(build_set_power_report(self.device_type, on))
    }

    pub fn brightness_in_lumen(&mut self) -> DeviceResult<u16> {
        let response = self.query(build_get_brightness_report(self.device_type))?;
        let lumens = parse_value_response(&response).ok_or_else(short_response)?;
        debug!(device_type = %self.device_type, lumens, "read brightness");
        Ok(lumens)
    }

    /// Set brightness. Fails with [`DeviceError::InvalidBrightness`] before
    /// writing anything if `lumens` is outside this model's range.
    pub fn set_brightness_in_lumen(&mut self, lumens: u16) -> DeviceResult<()> {
        if !self.device_type.is_valid_brightness(lumens) {
            return Err(DeviceError::InvalidBrightness(lumens));
        }
        debug!(device_type = %self.device_type, lumens, "set brightness");
        self.send(build_set_brightness_report(self.device_type, lumens))
    }

    pub fn temperature_in_kelvin(&mut self) -> DeviceResult<u16> {
        let response = self.query(build_get_temperature_report(self.device_type))?;
        let kelvin = parse_value_response(&response).ok_or_else(short_response)?;
        debug!(device_type = %self.device_type, kelvin, "read temperature");
        Ok(kelvin)
    }

    /// Set color temperature. Fails with [`DeviceError::InvalidTemperature`]
    /// before writing anything unless `kelvin` is within 2700–6500 and a
    /// multiple of 100.
    pub fn set_temperature_in_kelvin(&mut self, kelvin: u16) -> DeviceResult<()> {
        if !self.device_type.is_valid_temperature(kelvin) {
            return Err(DeviceError::InvalidTemperature(kelvin));
        }
        debug!(device_type = %self.device_type, kelvin, "set temperature");
        self.send(build_set_temperature_report(self.device_type, kelvin))
    }

    pub fn minimum_brightness_in_lumen(&self) -> u16 {
        self.device_type.minimum_brightness_in_lumen()
    }

    pub fn maximum_brightness_in_lumen(&self) -> u16 {
        self.device_type.maximum_brightness_in_lumen()
    }

    pub fn minimum_temperature_in_kelvin(&self) -> u16 {
        MIN_TEMPERATURE_IN_KELVIN
    }

    pub fn maximum_temperature_in_kelvin(&self) -> u16 {
        MAX_TEMPERATURE_IN_KELVIN
    }

    fn send(&mut self, report: Report) -> DeviceResult<()> {
        trace!(report = ?report, "HID tx");
        self.connection.write_report(&report)?;
        Ok(())
    }

    fn query(&mut self, report: Report) -> DeviceResult<Vec<u8>> {
        self.send(report)?;
        let mut response = [0u8; RESPONSE_LEN];
        let len = self.connection.read_report(&mut response)?;
        let received = response.get(..len).unwrap_or(&response).to_vec();
        trace!(response = ?received, "HID rx");
        Ok(received)
    }
}

impl fmt::Debug for DeviceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceHandle")
            .field("device_type", &self.device_type)
            .finish_non_exhaustive()
    }
}

fn short_response() -> DeviceError {
    DeviceError::Transport(HidCommonError::InvalidReport(
        "response too short to carry a payload".to_string(),
    ))
}
