//! Litra device model classification and per-model limits.

#![deny(static_mut_refs)]

use core::fmt;

use crate::ids::{LITRA_USAGE_PAGE, LOGITECH_VENDOR_ID, prefixes, product_ids};

/// Minimum color temperature supported by every Litra model, in Kelvin.
pub const MIN_TEMPERATURE_IN_KELVIN: u16 = 2700;

/// Maximum color temperature supported by every Litra model, in Kelvin.
pub const MAX_TEMPERATURE_IN_KELVIN: u16 = 6500;

/// Color temperature must be a multiple of this step, in Kelvin.
pub const TEMPERATURE_STEP_IN_KELVIN: u16 = 100;

/// Litra model classification.
///
/// The three families differ only in the report prefix byte and the
/// brightness range; everything else in the protocol is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeviceType {
    /// Litra Glow (20–250 lm).
    LitraGlow,
    /// Litra Beam (30–400 lm).
    LitraBeam,
    /// Litra Beam LX (30–400 lm, separate command namespace).
    LitraBeamLX,
}

impl DeviceType {
    /// Classify a device by its product ID alone.
    ///
    /// Callers enumerating the bus should prefer [`classify`], which also
    /// checks the vendor ID and usage page.
    pub fn from_product_id(product_id: u16) -> Option<Self> {
        match product_id {
            product_ids::GLOW => Some(Self::LitraGlow),
            product_ids::BEAM | product_ids::BEAM_ALT => Some(Self::LitraBeam),
            product_ids::BEAM_LX => Some(Self::LitraBeamLX),
            _ => None,
        }
    }

    /// Byte 2 of every report sent to this model.
    pub fn prefix(self) -> u8 {
        match self {
            Self::LitraGlow | Self::LitraBeam => prefixes::GLOW_AND_BEAM,
            Self::LitraBeamLX => prefixes::BEAM_LX,
        }
    }

    /// Lowest brightness this model accepts, in lumens.
    pub fn minimum_brightness_in_lumen(self) -> u16 {
        match self {
            Self::LitraGlow => 20,
            Self::LitraBeam | Self::LitraBeamLX => 30,
        }
    }

    /// Highest brightness this model accepts, in lumens.
    pub fn maximum_brightness_in_lumen(self) -> u16 {
        match self {
            Self::LitraGlow => 250,
            Self::LitraBeam | Self::LitraBeamLX => 400,
        }
    }

    /// Lowest color temperature, in Kelvin. Shared by all models.
    pub fn minimum_temperature_in_kelvin(self) -> u16 {
        MIN_TEMPERATURE_IN_KELVIN
    }

    /// Highest color temperature, in Kelvin. Shared by all models.
    pub fn maximum_temperature_in_kelvin(self) -> u16 {
        MAX_TEMPERATURE_IN_KELVIN
    }

    /// Whether `lumens` lies within this model's brightness range.
    pub fn is_valid_brightness(self, lumens: u16) -> bool {
        (self.minimum_brightness_in_lumen()..=self.maximum_brightness_in_lumen()).contains(&lumens)
    }

    /// Whether `kelvin` lies within the temperature range and on a 100 K step.
    pub fn is_valid_temperature(self, kelvin: u16) -> bool {
        (self.minimum_temperature_in_kelvin()..=self.maximum_temperature_in_kelvin())
            .contains(&kelvin)
            && kelvin % TEMPERATURE_STEP_IN_KELVIN == 0
    }

    /// Human-readable product name.
    pub fn name(self) -> &'static str {
        match self {
            Self::LitraGlow => "Litra Glow",
            Self::LitraBeam => "Litra Beam",
            Self::LitraBeamLX => "Litra Beam LX",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify an enumerated HID interface.
///
/// Returns `None` unless the interface belongs to Logitech, sits on the Litra
/// control usage page, and carries a known Litra product ID.
pub fn classify(vendor_id: u16, usage_page: u16, product_id: u16) -> Option<DeviceType> {
    if vendor_id != LOGITECH_VENDOR_ID || usage_page != LITRA_USAGE_PAGE {
        return None;
    }
    DeviceType::from_product_id(product_id)
}
