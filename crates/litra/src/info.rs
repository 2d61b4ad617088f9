//! Serializable snapshot of a light's state, for UIs and JSON output.

use litra_hid_common::HidPort;
use litra_hid_protocol::DeviceType;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{Device, Litra};
use crate::convert::value_to_percentage;
use crate::error::DeviceResult;
use crate::handle::DeviceHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub serial_number: Option<String>,
    pub device_type: DeviceType,
    pub is_connected: bool,
    pub is_on: bool,
    pub brightness_lumens: u16,
    pub brightness_percentage: u8,
    pub temperature_kelvin: u16,
    pub min_brightness_lumens: u16,
    pub max_brightness_lumens: u16,
    pub min_temperature_kelvin: u16,
    pub max_temperature_kelvin: u16,
}

impl DeviceInfo {
    /// Query power, brightness and temperature from an open light.
    pub fn read(handle: &mut DeviceHandle) -> DeviceResult<Self> {
        let device_type = handle.device_type();
        let is_on = handle.is_on()?;
        let brightness_lumens = handle.brightness_in_lumen()?;
        let temperature_kelvin = handle.temperature_in_kelvin()?;
        let min = handle.minimum_brightness_in_lumen();
        let max = handle.maximum_brightness_in_lumen();
        Ok(Self {
            serial_number: handle.serial_number()?,
            device_type,
            is_connected: true,
            is_on,
            brightness_lumens,
            brightness_percentage: value_to_percentage(brightness_lumens, min, max),
            temperature_kelvin,
            min_brightness_lumens: min,
            max_brightness_lumens: max,
            min_temperature_kelvin: handle.minimum_temperature_in_kelvin(),
            max_temperature_kelvin: handle.maximum_temperature_in_kelvin(),
        })
    }

    /// Placeholder for a light that enumerated but could not be queried.
    /// Readings are at the bottom of the model's range.
    pub fn disconnected(serial_number: Option<String>, device_type: DeviceType) -> Self {
        let min_brightness = device_type.minimum_brightness_in_lumen();
        let min_temperature = device_type.minimum_temperature_in_kelvin();
        Self {
            serial_number,
            device_type,
            is_connected: false,
            is_on: false,
            brightness_lumens: min_brightness,
            brightness_percentage: 0,
            temperature_kelvin: min_temperature,
            min_brightness_lumens: min_brightness,
            max_brightness_lumens: device_type.maximum_brightness_in_lumen(),
            min_temperature_kelvin: min_temperature,
            max_temperature_kelvin: device_type.maximum_temperature_in_kelvin(),
        }
    }
}

impl<P: HidPort> Litra<P> {
    /// Snapshot every light in the current enumeration.
    ///
    /// Only enumeration failure is an error. A light that cannot be opened or
    /// queried is reported with `is_connected: false`.
    pub fn device_infos(&self) -> DeviceResult<Vec<DeviceInfo>> {
        Ok(self
            .get_connected_devices()?
            .map(|device| self.device_info(&device))
            .collect())
    }

    /// Snapshot one light, or its disconnected placeholder if it cannot be
    /// opened or queried.
    pub fn device_info(&self, device: &Device) -> DeviceInfo {
        match device.open(self).and_then(|mut h| DeviceInfo::read(&mut h)) {
            Ok(info) => info,
            Err(e) => {
                warn!(
                    device_type = %device.device_type(),
                    serial = device.serial_number().unwrap_or("-"),
                    error = %e,
                    "failed to query Litra light"
                );
                DeviceInfo::disconnected(
                    device.serial_number().map(str::to_owned),
                    device.device_type(),
                )
            }
        }
    }
}
