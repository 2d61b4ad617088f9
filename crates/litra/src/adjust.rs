//! Compound operations built from a read followed by a validated write.
//!
//! None of these are atomic. Another controller can change the light between
//! the read and the write; the write simply wins.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::percentage_to_value;
use crate::error::{DeviceError, DeviceResult};
use crate::handle::DeviceHandle;

/// How far to move brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjustment {
    /// An absolute number of lumens.
    Lumens(u16),
    /// A share of the device's lumen span. `Percentage(10)` on a Glow is
    /// `percentage_to_value(10, 20, 250) - 20`, which is 23 lm.
    Percentage(u8),
}

impl DeviceHandle {
    /// Flip the power state and return the new one.
    pub fn toggle(&mut self) -> DeviceResult<bool> {
        let on = !self.is_on()?;
        self.set_on(on)?;
        Ok(on)
    }

    /// Set brightness as a percentage of this model's lumen range.
    pub fn set_brightness_percentage(&mut self, percentage: u8) -> DeviceResult<()> {
        let lumens = percentage_to_value(
            percentage,
            self.minimum_brightness_in_lumen(),
            self.maximum_brightness_in_lumen(),
        );
        self.set_brightness_in_lumen(lumens)
    }

    /// Raise brightness by `adjustment`. Returns the lumens written.
    pub fn brightness_up(&mut self, adjustment: Adjustment) -> DeviceResult<u16> {
        let delta = self.brightness_delta(adjustment);
        let current = self.brightness_in_lumen()?;
        let target = current.saturating_add(delta);
        debug!(current, delta, target, "brightness up");
        self.set_brightness_in_lumen(target)?;
        Ok(target)
    }

    /// Lower brightness by `adjustment`. Returns the lumens written.
    ///
    /// A step larger than the current level fails with
    /// [`DeviceError::InvalidBrightness`] carrying the current lumens, and
    /// writes nothing.
    pub fn brightness_down(&mut self, adjustment: Adjustment) -> DeviceResult<u16> {
        let delta = self.brightness_delta(adjustment);
        let current = self.brightness_in_lumen()?;
        let target = current
            .checked_sub(delta)
            .ok_or(DeviceError::InvalidBrightness(current))?;
        debug!(current, delta, target, "brightness down");
        self.set_brightness_in_lumen(target)?;
        Ok(target)
    }

    /// Raise temperature by `delta` Kelvin. `delta` is not rounded, so it
    /// should be a multiple of 100. Returns the Kelvin written.
    pub fn temperature_up(&mut self, delta: u16) -> DeviceResult<u16> {
        let current = self.temperature_in_kelvin()?;
        let target = current.saturating_add(delta);
        debug!(current, delta, target, "temperature up");
        self.set_temperature_in_kelvin(target)?;
        Ok(target)
    }

    /// Lower temperature by `delta` Kelvin. Returns the Kelvin written.
    ///
    /// A step larger than the current level fails with
    /// [`DeviceError::InvalidTemperature`] carrying the current Kelvin.
    pub fn temperature_down(&mut self, delta: u16) -> DeviceResult<u16> {
        let current = self.temperature_in_kelvin()?;
        let target = current
            .checked_sub(delta)
            .ok_or(DeviceError::InvalidTemperature(current))?;
        debug!(current, delta, target, "temperature down");
        self.set_temperature_in_kelvin(target)?;
        Ok(target)
    }

    fn brightness_delta(&self, adjustment: Adjustment) -> u16 {
        match adjustment {
            Adjustment::Lumens(lumens) => lumens,
            Adjustment::Percentage(percentage) => {
                let min = self.minimum_brightness_in_lumen();
                let max = self.maximum_brightness_in_lumen();
                percentage_to_value(percentage, min, max).saturating_sub(min)
            }
        }
    }
}
