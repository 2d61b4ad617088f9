//! Litra HID output report encoding.
//!
//! All functions are pure and allocation-free.
//!
//! # Wire format
//!
//! Every command is a 20-byte report:
//!
//! ```text
//! Byte 0:     0x11  (report ID)
//! Byte 1:     0xFF  (device index)
//! Byte 2:     family prefix (0x04 Glow/Beam, 0x06 Beam LX)
//! Byte 3:     opcode
//! Bytes 4–5:  payload (power flag, or big-endian u16)
//! Bytes 6–19: zero
//! ```
//!
//! Query reports carry no payload; the device answers with a report of the
//! same length, decoded by [`crate::input`].
//!
//! The builders do not range-check their arguments. Validation against the
//! device's limits happens one layer up, before a report is ever built.

#![deny(static_mut_refs)]

use crate::ids::{header, opcodes};
use crate::types::DeviceType;

/// Wire size of every Litra report.
pub const REPORT_LEN: usize = 20;

/// A complete outbound report.
pub type Report = [u8; REPORT_LEN];

/// Build a report with an explicit opcode and two payload bytes.
pub fn build_report(device_type: DeviceType, opcode: u8, payload: [u8; 2]) -> Report {
    let [b0, b1] = payload;
    [
        header::REPORT_ID,
        header::DEVICE_INDEX,
        device_type.prefix(),
        opcode,
        b0,
        b1,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
        0x00,
    ]
}

/// Build the query-power report (opcode 0x01).
pub fn build_get_power_report(device_type: DeviceType) -> Report {
    build_report(device_type, opcodes::GET_POWER, [0x00, 0x00])
}

/// Build the set-power report (opcode 0x1C).
pub fn build_set_power_report(device_type: DeviceType, on: bool) -> Report {
    build_report(device_type, opcodes::SET_POWER, [u8::from(on), 0x00])
}

/// Build the query-brightness report (opcode 0x31).
pub fn build_get_brightness_report(device_type: DeviceType) -> Report {
    build_report(device_type, opcodes::GET_BRIGHTNESS, [0x00, 0x00])
}

/// Build the set-brightness report (opcode 0x4C).
///
/// `lumens` is written big-endian into bytes 4–5.
pub fn build_set_brightness_report(device_type: DeviceType, lumens: u16) -> Report {
    build_report(device_type, opcodes::SET_BRIGHTNESS, lumens.to_be_bytes())
}

/// Build the query-temperature report (opcode 0x81).
pub fn build_get_temperature_report(device_type: DeviceType) -> Report {
    build_report(device_type, opcodes::GET_TEMPERATURE, [0x00, 0x00])
}

/// Build the set-temperature report (opcode 0x9C).
///
/// `kelvin` is written big-endian into bytes 4–5.
pub fn build_set_temperature_report(device_type: DeviceType, kelvin: u16) -> Report {
    build_report(device_type, opcodes::SET_TEMPERATURE, kelvin.to_be_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_TYPES: [DeviceType; 3] = [
        DeviceType::LitraGlow,
        DeviceType::LitraBeam,
        DeviceType::LitraBeamLX,
    ];

    #[test]
    fn test_set_power_on_glow() {
        let r = build_set_power_report(DeviceType::LitraGlow, true);
        assert_eq!(&r[..6], &[0x11, 0xFF, 0x04, 0x1C, 0x01, 0x00]);
        assert_eq!(&r[6..], &[0u8; 14], "padding must be zero");
    }

    #[test]
    fn test_set_power_off_beam_lx() {
        let r = build_set_power_report(DeviceType::LitraBeamLX, false);
        assert_eq!(&r[..6], &[0x11, 0xFF, 0x06, 0x1C, 0x00, 0x00]);
    }

    #[test]
    fn test_set_brightness_is_big_endian() {
        // 400 dec = 0x0190
        let r = build_set_brightness_report(DeviceType::LitraBeam, 400);
        assert_eq!(r[3], 0x4C, "opcode must be SET_BRIGHTNESS (0x4C)");
        assert_eq!(r[4], 0x01, "MSB of 400");
        assert_eq!(r[5], 0x90, "LSB of 400");
    }

    #[test]
    fn test_set_temperature_is_big_endian() {
        // 6500 dec = 0x1964
        let r = build_set_temperature_report(DeviceType::LitraGlow, 6500);
        assert_eq!(r[3], 0x9C, "opcode must be SET_TEMPERATURE (0x9C)");
        assert_eq!(r[4], 0x19);
        assert_eq!(r[5], 0x64);
    }

    #[test]
    fn test_query_opcodes() {
        for device_type in ALL_TYPES {
            assert_eq!(build_get_power_report(device_type)[3], 0x01);
            assert_eq!(build_get_brightness_report(device_type)[3], 0x31);
            assert_eq!(build_get_temperature_report(device_type)[3], 0x81);
        }
    }

    #[test]
    fn test_query_reports_carry_no_payload() {
        for device_type in ALL_TYPES {
            for r in [
                build_get_power_report(device_type),
                build_get_brightness_report(device_type),
                build_get_temperature_report(device_type),
            ] {
                assert_eq!(&r[4..], &[0u8; 16]);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn prop_header_and_padding_fixed(value: u16, on: bool, idx in 0usize..3) {
            let device_type = ALL_TYPES[idx];
            for r in [
                build_set_power_report(device_type, on),
                build_set_brightness_report(device_type, value),
                build_set_temperature_report(device_type, value),
            ] {
                prop_assert_eq!(r[0], 0x11);
                prop_assert_eq!(r[1], 0xFF);
                prop_assert_eq!(r[2], device_type.prefix());
                prop_assert!(r[6..].iter().all(|&b| b == 0), "padding not zero: {:02X?}", r);
            }
        }

        #[test]
        fn prop_brightness_payload_round_trips(lumens: u16) {
            let r = build_set_brightness_report(DeviceType::LitraGlow, lumens);
            prop_assert_eq!(u16::from_be_bytes([r[4], r[5]]), lumens);
        }
    }
}
