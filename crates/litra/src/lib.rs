//! Query and control Logitech Litra lights (Glow, Beam, Beam LX) over USB HID.
//!
//! ```no_run
//! use litra::{Adjustment, Litra};
//!
//! # fn main() -> Result<(), litra::DeviceError> {
//! let litra = Litra::new()?;
//! for device in litra.get_connected_devices()? {
//!     let mut handle = device.open(&litra)?;
//!     handle.set_on(true)?;
//!     handle.set_temperature_in_kelvin(4500)?;
//!     handle.brightness_up(Adjustment::Percentage(10))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! All I/O is blocking. A handle is owned by one caller at a time; share it
//! across threads behind a `Mutex`.

#![deny(static_mut_refs)]
#![deny(clippy::unwrap_used)]

pub mod adjust;
pub mod catalog;
pub mod convert;
pub mod error;
pub mod handle;
pub mod info;

pub use adjust::Adjustment;
pub use catalog::{Device, Devices, Litra, enumerate};
pub use convert::{percentage_to_value, value_to_percentage};
pub use error::{DeviceError, DeviceResult};
pub use handle::DeviceHandle;
pub use info::DeviceInfo;

pub use litra_hid_common::{HidApiPort, HidCommonError, HidDevice, HidDeviceInfo, HidPort};
pub use litra_hid_protocol::{
    DeviceType, MAX_TEMPERATURE_IN_KELVIN, MIN_TEMPERATURE_IN_KELVIN, TEMPERATURE_STEP_IN_KELVIN,
    classify,
};
