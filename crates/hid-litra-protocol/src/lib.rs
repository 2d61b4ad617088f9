//! Logitech Litra HID protocol: device classification, command encoding and
//! response decoding.
//!
//! This crate is intentionally I/O-free and allocation-free. It provides pure
//! functions and types that can be tested without hardware; talking to a
//! device is the job of the `litra` crate.

#![deny(static_mut_refs)]

pub mod ids;
pub mod input;
pub mod output;
pub mod types;

pub use ids::{LITRA_USAGE_PAGE, LOGITECH_VENDOR_ID, opcodes, product_ids};
pub use input::{RESPONSE_LEN, parse_power_response, parse_value_response};
pub use output::{
    REPORT_LEN, Report, build_get_brightness_report, build_get_power_report,
    build_get_temperature_report, build_report, build_set_brightness_report,
    build_set_power_report, build_set_temperature_report,
};
pub use types::{
    DeviceType, MAX_TEMPERATURE_IN_KELVIN, MIN_TEMPERATURE_IN_KELVIN, TEMPERATURE_STEP_IN_KELVIN,
    classify,
};
