//! Output formatting for CLI responses

use core::fmt;

use anyhow::Error;
use colored::*;
use litra::{DeviceInfo, DeviceType};
use serde::Serialize;
use serde_json::{Value, json};

use crate::error::type_name;

/// What a command left a light at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LightState {
    Power { is_on: bool },
    Brightness { brightness_lumens: u16 },
    Temperature { temperature_kelvin: u16 },
}

impl fmt::Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightState::Power { is_on: true } => write!(f, "on"),
            LightState::Power { is_on: false } => write!(f, "off"),
            LightState::Brightness { brightness_lumens } => write!(f, "{brightness_lumens} lm"),
            LightState::Temperature { temperature_kelvin } => write!(f, "{temperature_kelvin} K"),
        }
    }
}

/// One light's result from a device-targeting command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightChange {
    pub serial_number: Option<String>,
    pub device_type: DeviceType,
    #[serde(flatten)]
    pub state: LightState,
}

pub fn error_json(error: &Error) -> Value {
    json!({
        "success": false,
        "error": {
            "message": error.to_string(),
            "type": type_name(error)
        }
    })
}

pub fn device_list_json(devices: &[DeviceInfo]) -> Value {
    json!({
        "success": true,
        "devices": devices
    })
}

pub fn changes_json(changes: &[LightChange]) -> Value {
    json!({
        "success": true,
        "results": changes
    })
}

fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format output as JSON: {e}"),
    }
}

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    print_json(&error_json(error));
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

pub fn print_device_list(devices: &[DeviceInfo], json: bool) {
    if json {
        print_json(&device_list_json(devices));
        return;
    }

    if devices.is_empty() {
        println!("{}", "No Litra lights found".yellow());
        return;
    }

    println!("{}", "Connected Lights:".bold());
    for device in devices {
        print_device_human(device);
    }
}

fn print_device_human(device: &DeviceInfo) {
    let serial = device.serial_number.as_deref().unwrap_or("no serial");
    if !device.is_connected {
        println!(
            "  {} {} ({}) {}",
            "●".red(),
            device.device_type.to_string().bold(),
            serial.dimmed(),
            "unreachable".red()
        );
        return;
    }

    let power = if device.is_on {
        "On".green()
    } else {
        "Off".red()
    };
    println!(
        "  {} {} ({}) {}",
        "●".green(),
        device.device_type.to_string().bold(),
        serial.dimmed(),
        power
    );
    println!(
        "    Brightness: {} lm ({}%), range {}-{} lm",
        device.brightness_lumens,
        device.brightness_percentage,
        device.min_brightness_lumens,
        device.max_brightness_lumens
    );
    println!(
        "    Temperature: {} K, range {}-{} K",
        device.temperature_kelvin, device.min_temperature_kelvin, device.max_temperature_kelvin
    );
}

pub fn print_changes(changes: &[LightChange], json: bool) {
    if json {
        print_json(&changes_json(changes));
        return;
    }

    for change in changes {
        println!(
            "{} {} ({}): {}",
            "✓".green(),
            change.device_type,
            change.serial_number.as_deref().unwrap_or("no serial").dimmed(),
            change.state.to_string().cyan()
        );
    }
}
