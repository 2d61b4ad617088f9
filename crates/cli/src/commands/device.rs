//! Device listing

use anyhow::Result;
use litra::{DeviceInfo, HidPort, Litra};

use crate::error::CliError;

/// State of every connected light, or of the one with `serial_number`.
///
/// With a serial number only the matching light is opened.
pub fn list<P: HidPort>(litra: &Litra<P>, serial_number: Option<&str>) -> Result<Vec<DeviceInfo>> {
    let Some(serial) = serial_number else {
        return Ok(litra.device_infos()?);
    };

    let device = litra
        .find_by_serial_number(serial)?
        .ok_or_else(|| CliError::DeviceNotFound(serial.to_string()))?;
    Ok(vec![litra.device_info(&device)])
}
