//! Command implementations for litractl

pub mod brightness;
pub mod device;
pub mod power;
pub mod temperature;

use anyhow::Result;
use clap::{Args, Subcommand};
use litra::{Adjustment, Device, DeviceError, DeviceHandle, DeviceInfo, HidPort, Litra};
use tracing::debug;

use crate::error::CliError;
use crate::output::{self, LightChange, LightState};

/// Commands that talk to lights. Each honours the global `--serial-number`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum LightCommands {
    /// List connected lights and their current state
    Devices,

    /// Turn the light on
    On,

    /// Turn the light off
    Off,

    /// Toggle the light on or off
    Toggle,

    /// Set brightness
    Brightness(BrightnessArgs),

    /// Raise brightness
    BrightnessUp(BrightnessArgs),

    /// Lower brightness
    BrightnessDown(BrightnessArgs),

    /// Set color temperature
    Temperature(TemperatureArgs),

    /// Raise color temperature
    TemperatureUp(TemperatureArgs),

    /// Lower color temperature
    TemperatureDown(TemperatureArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Result of a command, before formatting.
#[derive(Debug)]
pub enum Outcome {
    Devices(Vec<DeviceInfo>),
    Changes(Vec<LightChange>),
}

/// `--value` or `--percentage`, exactly one.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
#[group(required = true, multiple = false)]
pub struct BrightnessArgs {
    /// Brightness in lumens
    #[arg(long)]
    pub value: Option<u16>,

    /// Brightness as a percentage of the light's range
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub percentage: Option<u8>,
}

impl BrightnessArgs {
    pub fn adjustment(&self) -> Result<Adjustment, CliError> {
        match (self.value, self.percentage) {
            (Some(lumens), None) => Ok(Adjustment::Lumens(lumens)),
            (None, Some(percentage)) => Ok(Adjustment::Percentage(percentage)),
            _ => Err(CliError::InvalidArgument(
                "exactly one of --value or --percentage is required".to_string(),
            )),
        }
    }
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemperatureArgs {
    /// Temperature in Kelvin, a multiple of 100
    #[arg(long)]
    pub value: u16,
}

/// Execute a light command and print its outcome.
pub fn execute<P: HidPort>(
    cmd: &LightCommands,
    litra: &Litra<P>,
    serial_number: Option<&str>,
    json: bool,
) -> Result<()> {
    match run(cmd, litra, serial_number)? {
        Outcome::Devices(devices) => output::print_device_list(&devices, json),
        Outcome::Changes(changes) => output::print_changes(&changes, json),
    }
    Ok(())
}

pub fn run<P: HidPort>(
    cmd: &LightCommands,
    litra: &Litra<P>,
    serial_number: Option<&str>,
) -> Result<Outcome> {
    let changes = match cmd {
        LightCommands::Devices => {
            return Ok(Outcome::Devices(device::list(litra, serial_number)?));
        }
        LightCommands::On => power::apply(litra, serial_number, power::PowerAction::On)?,
        LightCommands::Off => power::apply(litra, serial_number, power::PowerAction::Off)?,
        LightCommands::Toggle => power::apply(litra, serial_number, power::PowerAction::Toggle)?,
        LightCommands::Brightness(args) => brightness::set(litra, serial_number, args)?,
        LightCommands::BrightnessUp(args) => {
            brightness::adjust(litra, serial_number, args, Direction::Up)?
        }
        LightCommands::BrightnessDown(args) => {
            brightness::adjust(litra, serial_number, args, Direction::Down)?
        }
        LightCommands::Temperature(args) => temperature::set(litra, serial_number, args.value)?,
        LightCommands::TemperatureUp(args) => {
            temperature::adjust(litra, serial_number, args.value, Direction::Up)?
        }
        LightCommands::TemperatureDown(args) => {
            temperature::adjust(litra, serial_number, args.value, Direction::Down)?
        }
    };
    Ok(Outcome::Changes(changes))
}

/// Open each target in turn and apply `f`. Stops at the first failure.
pub fn for_each_target<P, F>(
    litra: &Litra<P>,
    serial_number: Option<&str>,
    mut f: F,
) -> Result<Vec<LightChange>>
where
    P: HidPort,
    F: FnMut(&mut DeviceHandle) -> Result<LightState, DeviceError>,
{
    target_devices(litra, serial_number)?
        .into_iter()
        .map(|device| -> Result<LightChange> {
            let mut handle = device.open(litra)?;
            let state = f(&mut handle)?;
            debug!(device_type = %device.device_type(), %state, "applied");
            Ok(LightChange {
                serial_number: device.serial_number().map(str::to_owned),
                device_type: device.device_type(),
                state,
            })
        })
        .collect()
}

/// Lights a command should act on: the one matching `serial_number`, or
/// every connected light.
pub fn target_devices<P: HidPort>(
    litra: &Litra<P>,
    serial_number: Option<&str>,
) -> Result<Vec<Device>> {
    match serial_number {
        Some(serial) => {
            let device = litra
                .find_by_serial_number(serial)?
                .ok_or_else(|| CliError::DeviceNotFound(serial.to_string()))?;
            Ok(vec![device])
        }
        None => {
            let devices: Vec<Device> = litra.get_connected_devices()?.collect();
            if devices.is_empty() {
                return Err(CliError::NoDevices.into());
            }
            debug!(count = devices.len(), "acting on every connected light");
            Ok(devices)
        }
    }
}
