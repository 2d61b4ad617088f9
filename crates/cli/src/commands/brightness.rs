//! Brightness commands

use anyhow::Result;
use litra::{Adjustment, HidPort, Litra, percentage_to_value};

use crate::commands::{BrightnessArgs, Direction, for_each_target};
use crate::output::{LightChange, LightState};

pub fn set<P: HidPort>(
    litra: &Litra<P>,
    serial_number: Option<&str>,
    args: &BrightnessArgs,
) -> Result<Vec<LightChange>> {
    let adjustment = args.adjustment()?;
    for_each_target(litra, serial_number, |handle| {
        let brightness_lumens = match adjustment {
            Adjustment::Lumens(lumens) => {
                handle.set_brightness_in_lumen(lumens)?;
                lumens
            }
            Adjustment::Percentage(percentage) => {
                handle.set_brightness_percentage(percentage)?;
                percentage_to_value(
                    percentage,
                    handle.minimum_brightness_in_lumen(),
                    handle.maximum_brightness_in_lumen(),
                )
            }
        };
        Ok(LightState::Brightness { brightness_lumens })
    })
}

pub fn adjust<P: HidPort>(
    litra: &Litra<P>,
    serial_number: Option<&str>,
    args: &BrightnessArgs,
    direction: Direction,
) -> Result<Vec<LightChange>> {
    let adjustment = args.adjustment()?;
    for_each_target(litra, serial_number, |handle| {
        let brightness_lumens = match direction {
            Direction::Up => handle.brightness_up(adjustment)?,
            Direction::Down => handle.brightness_down(adjustment)?,
        };
        Ok(LightState::Brightness { brightness_lumens })
    })
}
