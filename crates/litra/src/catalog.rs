//! Discovery of attached Litra lights.

use litra_hid_common::{HidApiPort, HidDeviceInfo, HidPort};
use litra_hid_protocol::{DeviceType, classify};
use tracing::debug;

use crate::error::{DeviceError, DeviceResult};
use crate::handle::DeviceHandle;

/// A recognized Litra control interface that has not been opened yet.
///
/// This is a copy of one entry of an enumeration snapshot. If the light is
/// unplugged before [`Device::open`], opening fails with a transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    info: HidDeviceInfo,
    device_type: DeviceType,
}

impl Device {
    pub fn device_info(&self) -> &HidDeviceInfo {
        &self.info
    }

    pub fn device_type(&self) -> DeviceType {
        self.device_type
    }

    /// Serial number from the enumeration snapshot, if the platform reported one.
    pub fn serial_number(&self) -> Option<&str> {
        self.info.serial_number.as_deref()
    }

    /// Open a session with this light through `context`'s transport.
    pub fn open<P: HidPort>(&self, context: &Litra<P>) -> DeviceResult<DeviceHandle> {
        context.open(self)
    }
}

impl TryFrom<HidDeviceInfo> for Device {
    type Error = DeviceError;

    fn try_from(info: HidDeviceInfo) -> DeviceResult<Self> {
        let device_type = classify(info.vendor_id, info.usage_page, info.product_id)
            .ok_or(DeviceError::Unsupported)?;
        Ok(Self { info, device_type })
    }
}

/// The Litra lights in one enumeration snapshot.
///
/// Lazy over the snapshot and cloneable, so it can be walked more than once.
/// Order is whatever the transport reported and may change between scans.
#[derive(Debug, Clone)]
pub struct Devices {
    inner: std::vec::IntoIter<HidDeviceInfo>,
}

impl Iterator for Devices {
    type Item = Device;

    fn next(&mut self) -> Option<Device> {
        self.inner.find_map(|info| Device::try_from(info).ok())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// Enumerate the Litra lights visible through `port`.
pub fn enumerate<P: HidPort + ?Sized>(port: &P) -> DeviceResult<Devices> {
    let interfaces = port.list_devices()?;
    debug!(interfaces = interfaces.len(), "scanning for Litra lights");
    Ok(Devices {
        inner: interfaces.into_iter(),
    })
}

/// Entry point: a transport plus the operations that find and open lights.
pub struct Litra<P: HidPort = HidApiPort> {
    port: P,
}

impl Litra<HidApiPort> {
    /// Initialize the platform HID backend.
    pub fn new() -> DeviceResult<Self> {
        Ok(Self::with_port(HidApiPort::new()?))
    }
}

impl<P: HidPort> Litra<P> {
    pub fn with_port(port: P) -> Self {
        Self { port }
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Re-scan the bus for lights plugged in or removed since the last scan.
    pub fn refresh_connected_devices(&mut self) -> DeviceResult<()> {
        self.port.refresh()?;
        Ok(())
    }

    /// Lights in the current snapshot.
    pub fn get_connected_devices(&self) -> DeviceResult<Devices> {
        enumerate(&self.port)
    }

    /// First light in the current snapshot whose serial number is `serial_number`.
    pub fn find_by_serial_number(&self, serial_number: &str) -> DeviceResult<Option<Device>> {
        Ok(self
            .get_connected_devices()?
            .find(|device| device.serial_number() == Some(serial_number)))
    }

    /// Open `device`. The handle owns the connection and a copy of the type.
    pub fn open(&self, device: &Device) -> DeviceResult<DeviceHandle> {
        let connection = self.port.open_device(&device.info)?;
        debug!(
            device_type = %device.device_type,
            path = %device.info.path,
            "opened Litra light"
        );
        Ok(DeviceHandle::new(connection, device.device_type))
    }
}
