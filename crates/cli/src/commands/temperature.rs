//! Color temperature commands

use anyhow::Result;
use litra::{HidPort, Litra};

use crate::commands::{Direction, for_each_target};
use crate::output::{LightChange, LightState};

pub fn set<P: HidPort>(
    litra: &Litra<P>,
    serial_number: Option<&str>,
    kelvin: u16,
) -> Result<Vec<LightChange>> {
    for_each_target(litra, serial_number, |handle| {
        handle.set_temperature_in_kelvin(kelvin)?;
        Ok(LightState::Temperature {
            temperature_kelvin: kelvin,
        })
    })
}

pub fn adjust<P: HidPort>(
    litra: &Litra<P>,
    serial_number: Option<&str>,
    delta: u16,
    direction: Direction,
) -> Result<Vec<LightChange>> {
    for_each_target(litra, serial_number, |handle| {
        let temperature_kelvin = match direction {
            Direction::Up => handle.temperature_up(delta)?,
            Direction::Down => handle.temperature_down(delta)?,
        };
        Ok(LightState::Temperature { temperature_kelvin })
    })
}
