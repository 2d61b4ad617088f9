//! HID device traits
//!
//! Both traits are blocking. A call returns when the underlying transport
//! completes or fails; there are no timeouts or background threads here.

use crate::{HidCommonError, HidCommonResult, HidDeviceInfo};

/// One opened HID interface.
///
/// Methods take `&mut self`: a write followed by its read must not be
/// interleaved with another caller's pair on the same connection.
pub trait HidDevice: Send {
    /// Write one complete report. Returns the number of bytes written.
    fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize>;

    /// Read one report into `buf`. Returns the number of bytes read.
    fn read_report(&mut self, buf: &mut [u8]) -> HidCommonResult<usize>;

    /// Serial number from the descriptor this interface was opened with.
    ///
    /// Read from the cached descriptor, so it still answers after the device
    /// goes away. `None` when the platform does not expose one.
    fn serial_number(&self) -> HidCommonResult<Option<String>>;
}

/// Enumeration and open facility for HID interfaces.
pub trait HidPort {
    /// Snapshot of every attached HID interface.
    fn list_devices(&self) -> HidCommonResult<Vec<HidDeviceInfo>>;

    /// Open the interface described by `info`.
    ///
    /// Fails if the interface has disappeared since it was enumerated.
    fn open_device(&self, info: &HidDeviceInfo) -> HidCommonResult<Box<dyn HidDevice>>;

    /// Re-scan the bus so the next [`HidPort::list_devices`] sees hot-plug changes.
    fn refresh(&mut self) -> HidCommonResult<()>;
}

pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// In-memory [`HidDevice`].
    ///
    /// Clones share their read queue, write history and connection flag, so
    /// a test can keep one clone for inspection while another is boxed into
    /// a handle.
    #[derive(Clone)]
    pub struct MockHidDevice {
        info: HidDeviceInfo,
        read_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
        write_history: Arc<Mutex<Vec<Vec<u8>>>>,
        connected: Arc<Mutex<bool>>,
    }

    impl MockHidDevice {
        pub fn new(vendor_id: u16, product_id: u16, path: impl Into<String>) -> Self {
            Self::from_info(HidDeviceInfo::new(vendor_id, product_id, path.into()))
        }

        pub fn from_info(info: HidDeviceInfo) -> Self {
            Self {
                info,
                read_queue: Arc::new(Mutex::new(VecDeque::new())),
                write_history: Arc::new(Mutex::new(Vec::new())),
                connected: Arc::new(Mutex::new(true)),
            }
        }

        pub fn info(&self) -> &HidDeviceInfo {
            &self.info
        }

        pub fn queue_read(&self, data: Vec<u8>) {
            let mut queue = self.read_queue.lock().unwrap_or_else(|e| e.into_inner());
            queue.push_back(data);
        }

        pub fn get_write_history(&self) -> Vec<Vec<u8>> {
            let history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.clone()
        }

        pub fn write_count(&self) -> usize {
            self.write_history
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .len()
        }

        pub fn pending_reads(&self) -> usize {
            self.read_queue
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .len()
        }

        pub fn is_connected(&self) -> bool {
            *self.connected.lock().unwrap_or_else(|e| e.into_inner())
        }

        pub fn disconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = false;
        }

        pub fn reconnect(&self) {
            let mut connected = self.connected.lock().unwrap_or_else(|e| e.into_inner());
            *connected = true;
        }
    }

    impl HidDevice for MockHidDevice {
        fn write_report(&mut self, data: &[u8]) -> HidCommonResult<usize> {
            if !self.is_connected() {
                return Err(HidCommonError::Disconnected);
            }

            let mut history = self.write_history.lock().unwrap_or_else(|e| e.into_inner());
            history.push(data.to_vec());
            Ok(data.len())
        }

        fn read_report(&mut self, buf: &mut [u8]) -> HidCommonResult<usize> {
            if !self.is_connected() {
                return Err(HidCommonError::Disconnected);
            }

            let mut queue = self.read_queue.lock().unwrap_or_else(|e| e.into_inner());
            let data = queue
                .pop_front()
                .ok_or_else(|| HidCommonError::ReadError("No data available".to_string()))?;
            let len = data.len().min(buf.len());
            buf.iter_mut()
                .zip(data.iter())
                .for_each(|(dst, src)| *dst = *src);
            Ok(len)
        }

        fn serial_number(&self) -> HidCommonResult<Option<String>> {
            Ok(self.info.serial_number.clone())
        }
    }

    /// In-memory [`HidPort`] over a set of [`MockHidDevice`]s.
    #[derive(Default)]
    pub struct MockHidPort {
        devices: Vec<MockHidDevice>,
        enumeration_error: Option<String>,
        refresh_count: usize,
    }

    impl MockHidPort {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn add_device(&mut self, device: MockHidDevice) {
            self.devices.push(device);
        }

        /// Unplug the device at `path`. Descriptors enumerated earlier go stale.
        pub fn remove_device(&mut self, path: &str) -> Option<MockHidDevice> {
            let index = self.devices.iter().position(|d| d.info.path == path)?;
            Some(self.devices.remove(index))
        }

        pub fn device_count(&self) -> usize {
            self.devices.len()
        }

        pub fn refresh_count(&self) -> usize {
            self.refresh_count
        }

        /// Make every subsequent [`HidPort::list_devices`] call fail.
        pub fn fail_enumeration(&mut self, reason: impl Into<String>) {
            self.enumeration_error = Some(reason.into());
        }
    }

    impl HidPort for MockHidPort {
        fn list_devices(&self) -> HidCommonResult<Vec<HidDeviceInfo>> {
            if let Some(reason) = &self.enumeration_error {
                return Err(HidCommonError::Enumeration(reason.clone()));
            }
            Ok(self.devices.iter().map(|d| d.info.clone()).collect())
        }

        fn open_device(&self, info: &HidDeviceInfo) -> HidCommonResult<Box<dyn HidDevice>> {
            let device = self
                .devices
                .iter()
                .find(|d| d.info.path == info.path)
                .ok_or_else(|| HidCommonError::DeviceNotFound(info.path.clone()))?;
            if !device.is_connected() {
                return Err(HidCommonError::OpenError(format!(
                    "{} is disconnected",
                    info.path
                )));
            }
            Ok(Box::new(device.clone()))
        }

        fn refresh(&mut self) -> HidCommonResult<()> {
            self.refresh_count += 1;
            Ok(())
        }
    }
}
