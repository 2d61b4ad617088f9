//! Litra HID response decoding.
//!
//! All functions are pure and allocation-free. Values are decoded exactly as
//! the device reports them; no range checks are applied on the way in.

#![deny(static_mut_refs)]

/// Size of the buffer a response is read into.
pub const RESPONSE_LEN: usize = 20;

/// Byte offset of the first payload byte in a response.
const PAYLOAD_OFFSET: usize = 4;

/// Decode a power-state response: on when byte 4 equals `1`.
///
/// Returns `None` if `data` is too short to carry a payload.
pub fn parse_power_response(data: &[u8]) -> Option<bool> {
    data.get(PAYLOAD_OFFSET).map(|&flag| flag == 1)
}

/// Decode a brightness or temperature response: bytes 4–5, big-endian.
///
/// Returns `None` if `data` is too short to carry a two-byte payload.
pub fn parse_value_response(data: &[u8]) -> Option<u16> {
    match data.get(PAYLOAD_OFFSET..PAYLOAD_OFFSET + 2)? {
        [hi, lo] => Some(u16::from_be_bytes([*hi, *lo])),
        _ => None,
    }
}
