//! Device information types for HID interfaces

use serde::{Deserialize, Serialize};

/// Metadata for one enumerated HID interface.
///
/// A physical Litra exposes several interfaces; `usage_page` tells them
/// apart. `serial_number` is optional because some OS/driver combinations do
/// not report it, and it is not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HidDeviceInfo {
    pub vendor_id: u16,
    pub product_id: u16,
    pub usage_page: u16,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
    pub path: String,
}

impl HidDeviceInfo {
    pub fn new(vendor_id: u16, product_id: u16, path: String) -> Self {
        Self {
            vendor_id,
            product_id,
            usage_page: 0,
            serial_number: None,
            manufacturer: None,
            product_name: None,
            path,
        }
    }

    pub fn with_usage_page(mut self, usage_page: u16) -> Self {
        self.usage_page = usage_page;
        self
    }

    pub fn with_serial(mut self, serial: impl Into<String>) -> Self {
        self.serial_number = Some(serial.into());
        self
    }

}
