//! Power commands

use anyhow::Result;
use litra::{HidPort, Litra};

use crate::commands::for_each_target;
use crate::output::{LightChange, LightState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    On,
    Off,
    Toggle,
}

pub fn apply<P: HidPort>(
    litra: &Litra<P>,
    serial_number: Option<&str>,
    action: PowerAction,
) -> Result<Vec<LightChange>> {
    for_each_target(litra, serial_number, |handle| {
        let is_on = match action {
            PowerAction::On => {
                handle.set_on(true)?;
                true
            }
            PowerAction::Off => {
                handle.set_on(false)?;
                false
            }
            PowerAction::Toggle => handle.toggle()?,
        };
        Ok(LightState::Power { is_on })
    })
}
