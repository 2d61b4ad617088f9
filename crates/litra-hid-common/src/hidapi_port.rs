//! [`HidPort`] and [`HidDevice`] over the system HID stack via `hidapi`.

use std::ffi::CString;

use hidapi::HidApi;
use tracing::{debug, trace};

use crate::{HidCommonError, HidCommonResult, HidDevice, HidDeviceInfo, HidPort};

/// The platform HID backend.
///
/// Holds the `hidapi` context, whose device list is a snapshot taken at
/// construction and on every [`HidPort::refresh`].
pub struct HidApiPort {
    api: HidApi,
}

impl HidApiPort {
    pub fn new() -> HidCommonResult<Self> {
        let api = HidApi::new().map_err(|e| HidCommonError::Enumeration(e.to_string()))?;
        Ok(Self { api })
    }
}

impl HidPort for HidApiPort {
    fn list_devices(&self) -> HidCommonResult<Vec<HidDeviceInfo>> {
        let devices: Vec<HidDeviceInfo> = self.api.device_list().map(convert_info).collect();
        trace!(count = devices.len(), "enumerated HID interfaces");
        Ok(devices)
    }

    fn open_device(&self, info: &HidDeviceInfo) -> HidCommonResult<Box<dyn HidDevice>> {
        let path = CString::new(info.path.as_str())
            .map_err(|e| HidCommonError::OpenError(format!("{}: {e}", info.path)))?;
        let inner = self
            .api
            .open_path(&path)
            .map_err(|e| HidCommonError::OpenError(format!("{}: {e}", info.path)))?;
        debug!(path = %info.path, "opened HID interface");
        Ok(Box::new(HidApiDevice {
            inner,
            path: info.path.clone(),
            serial_number: info.serial_number.clone(),
        }))
    }

    fn refresh(&mut self) -> HidCommonResult<()> {
        self.api
            .refresh_devices()
            .map_err(|e| HidCommonError::Enumeration(e.to_string()))
    }
}

/// An interface opened through [`HidApiPort`].
///
/// Keeps the serial number from the enumerated descriptor, already
/// normalized so an empty string reads as `None`.
pub struct HidApiDevice {
    inner: hidapi::HidDevice,
    path: String,
    serial_number: Option<String>,
}

impl HidDevice for HidApiDevice {
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
        self.inner
            .write(data)
            .map_err(|e| HidCommonError::WriteError(format!("{}: {e}", self.path)))
    }

    fn read_report(&mut self, buf: &mut [u8]) -> HidCommonResult<usize> {
        self.inner
            .read(buf)
            .map_err(|e| HidCommonError::ReadError(format!("{}: {e}", self.path)))
    }

    fn serial_number(&self) -> HidCommonResult<Option<String>> {
        Ok(self.serial_number.clone())
    }
}

fn convert_info(info: &hidapi::DeviceInfo) -> HidDeviceInfo {
    HidDeviceInfo {
        vendor_id: info.vendor_id(),
        product_id: info.product_id(),
        usage_page: info.usage_page(),
        serial_number: info
            .serial_number()
            .filter(|s| !s.is_empty())
            .map(str::to_owned),
        manufacturer: info.manufacturer_string().map(str::to_owned),
        product_name: info.product_string().map(str::to_owned),
        path: info.path().to_string_lossy().into_owned(),
    }
}
