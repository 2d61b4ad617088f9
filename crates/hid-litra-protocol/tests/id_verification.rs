//! Cross-reference tests for Litra VID/PID and usage-page constants.
//!
//! These values are what the operating system reports for the Litra control
//! interface; if an assertion fails, a device will silently stop enumerating.

use litra_hid_protocol::{LITRA_USAGE_PAGE, LOGITECH_VENDOR_ID, opcodes, product_ids};

#[test]
fn vendor_id_is_046d() {
    assert_eq!(LOGITECH_VENDOR_ID, 0x046D, "Logitech VID changed");
}

#[test]
fn usage_page_is_ff43() {
    assert_eq!(LITRA_USAGE_PAGE, 0xFF43);
}

// ── Product IDs ──────────────────────────────────────────────────────────────

#[test]
fn glow_pid_is_c900() {
    assert_eq!(product_ids::GLOW, 0xC900);
}

#[test]
fn beam_pid_is_c901() {
    assert_eq!(product_ids::BEAM, 0xC901);
}

#[test]
fn beam_alt_pid_is_b901() {
    assert_eq!(product_ids::BEAM_ALT, 0xB901);
}

#[test]
fn beam_lx_pid_is_c903() {
    assert_eq!(product_ids::BEAM_LX, 0xC903);
}

// ── Opcodes ──────────────────────────────────────────────────────────────────

#[test]
fn opcode_table_matches_firmware() {
    assert_eq!(opcodes::GET_POWER, 0x01);
    assert_eq!(opcodes::SET_POWER, 0x1C);
    assert_eq!(opcodes::GET_BRIGHTNESS, 0x31);
    assert_eq!(opcodes::SET_BRIGHTNESS, 0x4C);
    assert_eq!(opcodes::GET_TEMPERATURE, 0x81);
    assert_eq!(opcodes::SET_TEMPERATURE, 0x9C);
}
