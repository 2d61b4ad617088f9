//! Property tests for device handle validation and compound operations,
//! driven through the in-memory transport.

use litra::{Adjustment, DeviceError, DeviceHandle, DeviceType, percentage_to_value};
use litra_hid_common::mock::MockHidDevice;
use proptest::prelude::*;

const ALL_TYPES: [DeviceType; 3] = [
    DeviceType::LitraGlow,
    DeviceType::LitraBeam,
    DeviceType::LitraBeamLX,
];

fn handle(device_type: DeviceType) -> (DeviceHandle, MockHidDevice) {
    let mock = MockHidDevice::new(0x046D, 0xC900, "/dev/hidraw0");
    (DeviceHandle::new(Box::new(mock.clone()), device_type), mock)
}

fn respond(mock: &MockHidDevice, value: u16) {
    let [hi, lo] = value.to_be_bytes();
    let mut data = vec![0x11, 0xFF, 0x04, 0x00, hi, lo];
    data.resize(20, 0);
    mock.queue_read(data);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_brightness_writes_iff_in_range(lumens: u16, idx in 0usize..3) {
        let device_type = ALL_TYPES[idx];
        let (mut handle, mock) = handle(device_type);
        let in_range = (device_type.minimum_brightness_in_lumen()
            ..=device_type.maximum_brightness_in_lumen())
            .contains(&lumens);

        let result = handle.set_brightness_in_lumen(lumens);
        prop_assert_eq!(result.is_ok(), in_range);
        prop_assert_eq!(mock.write_count(), usize::from(in_range));
        if !in_range {
            prop_assert!(matches!(result, Err(DeviceError::InvalidBrightness(v)) if v == lumens));
        }
    }

    #[test]
    fn prop_brightness_set_then_get_round_trips(idx in 0usize..3, seed: u16) {
        let device_type = ALL_TYPES[idx];
        let min = device_type.minimum_brightness_in_lumen();
        let span = device_type.maximum_brightness_in_lumen() - min + 1;
        let lumens = min + seed % span;
        let (mut handle, mock) = handle(device_type);

        handle.set_brightness_in_lumen(lumens)?;
        // Echo the written report back as the device's answer.
        let written = mock.get_write_history().pop().ok_or_else(|| TestCaseError::fail("no write"))?;
        mock.queue_read(written);
        prop_assert_eq!(handle.brightness_in_lumen()?, lumens);
    }

    #[test]
    fn prop_temperature_writes_iff_on_step(kelvin: u16) {
        let (mut handle, mock) = handle(DeviceType::LitraBeam);
        let valid = (2700..=6500).contains(&kelvin) && kelvin % 100 == 0;

        let result = handle.set_temperature_in_kelvin(kelvin);
        prop_assert_eq!(result.is_ok(), valid);
        prop_assert_eq!(mock.write_count(), usize::from(valid));
        if valid {
            let written = mock.get_write_history();
            prop_assert_eq!(u16::from_be_bytes([written[0][4], written[0][5]]), kelvin);
        }
    }

    #[test]
    fn prop_percentage_stays_in_range(percentage in 0u8..=100, idx in 0usize..3) {
        let device_type = ALL_TYPES[idx];
        let min = device_type.minimum_brightness_in_lumen();
        let max = device_type.maximum_brightness_in_lumen();
        let lumens = percentage_to_value(percentage, min, max);
        prop_assert!((min..=max).contains(&lumens));

        let (mut handle, mock) = handle(device_type);
        prop_assert!(handle.set_brightness_percentage(percentage).is_ok());
        prop_assert_eq!(mock.write_count(), 1);
    }

    #[test]
    fn prop_brightness_down_never_wraps(current in 0u16..=400, delta: u16) {
        let (mut handle, mock) = handle(DeviceType::LitraBeam);
        respond(&mock, current);

        match handle.brightness_down(Adjustment::Lumens(delta)) {
            Ok(target) => {
                prop_assert_eq!(target, current - delta);
                prop_assert!(target >= 30);
                prop_assert_eq!(mock.write_count(), 2);
            }
            Err(e) => {
                let expected = current.checked_sub(delta).unwrap_or(current);
                prop_assert!(matches!(e, DeviceError::InvalidBrightness(v) if v == expected));
                // Only the read query went out.
                prop_assert_eq!(mock.write_count(), 1);
            }
        }
    }

    #[test]
    fn prop_temperature_up_never_wraps(current in 2700u16..=6500, delta: u16) {
        let (mut handle, mock) = handle(DeviceType::LitraGlow);
        respond(&mock, current);

        if let Ok(target) = handle.temperature_up(delta) {
            prop_assert_eq!(u32::from(target), u32::from(current) + u32::from(delta));
            prop_assert!(target <= 6500);
        } else {
            prop_assert_eq!(mock.write_count(), 1);
        }
    }
}

#[test]
fn disconnect_between_operations_fails_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let (mut handle, mock) = handle(DeviceType::LitraGlow);
    handle.set_on(true)?;
    mock.disconnect();

    let err = handle.brightness_up(Adjustment::Lumens(10)).err().ok_or("expected failure")?;
    assert!(err.is_transport());
    assert_eq!(mock.write_count(), 1);
    Ok(())
}
