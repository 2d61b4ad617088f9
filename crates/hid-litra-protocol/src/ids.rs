//! Logitech Litra USB identifiers and report constants.

#![deny(static_mut_refs)]

/// Logitech USB vendor ID.
pub const LOGITECH_VENDOR_ID: u16 = 0x046D;

/// Vendor-defined HID usage page of the Litra control interface.
///
/// Litra lights expose several HID interfaces; only the one on this usage
/// page accepts the 20-byte control reports.
pub const LITRA_USAGE_PAGE: u16 = 0xFF43;

/// Fixed header bytes at the start of every report.
pub mod header {
    /// Byte 0: long HID++ report ID.
    pub const REPORT_ID: u8 = 0x11;
    /// Byte 1: device index (the wired device itself).
    pub const DEVICE_INDEX: u8 = 0xFF;
}

/// Device-family prefix carried in byte 2 of every report.
pub mod prefixes {
    /// Litra Glow and Litra Beam.
    pub const GLOW_AND_BEAM: u8 = 0x04;
    /// Litra Beam LX.
    pub const BEAM_LX: u8 = 0x06;
}

/// Opcode bytes carried in byte 3 of every report.
pub mod opcodes {
    /// Query power state.
    pub const GET_POWER: u8 = 0x01;
    /// Set power state; payload byte 4 is `1` (on) or `0` (off).
    pub const SET_POWER: u8 = 0x1C;
    /// Query brightness in lumens.
    pub const GET_BRIGHTNESS: u8 = 0x31;
    /// Set brightness; payload bytes 4–5 are big-endian lumens.
    pub const SET_BRIGHTNESS: u8 = 0x4C;
    /// Query color temperature in Kelvin.
    pub const GET_TEMPERATURE: u8 = 0x81;
    /// Set color temperature; payload bytes 4–5 are big-endian Kelvin.
    pub const SET_TEMPERATURE: u8 = 0x9C;
}

/// Known Litra product IDs.
pub mod product_ids {
    /// Litra Glow.
    pub const GLOW: u16 = 0xC900;
    /// Litra Beam.
    pub const BEAM: u16 = 0xC901;
    /// Litra Beam, alternate firmware/hardware revision.
    pub const BEAM_ALT: u16 = 0xB901;
    /// Litra Beam LX.
    pub const BEAM_LX: u16 = 0xC903;
}
