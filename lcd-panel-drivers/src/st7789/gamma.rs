//! ST7789 gamma calibration
//!
//! The controller offers three ways to shape its gamma response:
//!
//! - One of four predefined curves (`GAMSET`)
//! - Positive/negative analog voltage tables (`PVGAMCTRL`/`NVGAMCTRL`)
//! - Digital lookup tables for the red and blue channels (`DGMLUTR`/`DGMLUTB`)
//!
//! A board picks exactly one [`Gamma`] when it builds the driver. The tables
//! are applied at the end of `init` on a best-effort basis: a failed gamma
//! command leaves the controller on its default curve, which still shows a
//! correct (if less tuned) image, so the failure is logged and skipped.

use lcd_panel_core::commands;
use lcd_panel_hal::PanelIo;

/// ST7789 gamma command codes
pub mod cmd {
    /// Positive voltage gamma control
    pub const PVGAMCTRL: u8 = 0xE0;
    /// Negative voltage gamma control
    pub const NVGAMCTRL: u8 = 0xE1;
    /// Digital gamma lookup table for red
    pub const DGMLUTR: u8 = 0xE2;
    /// Digital gamma lookup table for blue
    pub const DGMLUTB: u8 = 0xE3;
    /// Digital gamma enable
    pub const DGMEN: u8 = 0xBA;
}

/// `DGMEN` parameter enabling the digital gamma LUTs
const DGMEN_ON: u8 = 0x04;

/// Predefined gamma curves selectable with `GAMSET`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GammaCurve {
    /// Gamma 2.2 (GC0, power-on default)
    G2_2 = 0,
    /// Gamma 1.8 (GC1)
    G1_8 = 1,
    /// Gamma 2.5 (GC2)
    G2_5 = 2,
    /// Gamma 1.0 (GC3)
    G1_0 = 3,
}

impl GammaCurve {
    /// `GAMSET` parameter byte selecting this curve
    pub const fn param(self) -> u8 {
        1 << (self as u8)
    }
}

/// Analog gamma voltage tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AnalogGamma {
    /// `PVGAMCTRL` parameters
    pub positive: [u8; 14],
    /// `NVGAMCTRL` parameters
    pub negative: [u8; 14],
}

impl AnalogGamma {
    /// ST7789V datasheet defaults
    pub const DEFAULT: Self = Self {
        positive: [
            0x70, 0x2C, 0x2E, 0x15, 0x10, 0x09, 0x48, 0x33, 0x53, 0x0B, 0x19, 0x19, 0x20, 0x25,
        ],
        negative: [
            0x70, 0x2C, 0x2E, 0x15, 0x10, 0x09, 0x48, 0x33, 0x53, 0x0B, 0x19, 0x19, 0x20, 0x25,
        ],
    };

    /// Steeper mid-tones for IPS glass viewed in bright light
    pub const HIGH_CONTRAST: Self = Self {
        positive: [
            0xF0, 0x04, 0x08, 0x06, 0x08, 0x28, 0x40, 0x43, 0x60, 0x1E, 0x1C, 0x18, 0x35, 0x36,
        ],
        negative: [
            0xF0, 0x04, 0x08, 0x06, 0x08, 0x28, 0x40, 0x43, 0x60, 0x1E, 0x1C, 0x18, 0x35, 0x36,
        ],
    };
}

/// Digital gamma lookup table (64 entries, `round(255 * (i / 63) ^ exp)`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitalGamma {
    /// LUT entries, sent as-is
    pub lut: [u8; 64],
}

impl DigitalGamma {
    /// Exponent 0.20
    pub const POW_0_20: Self = Self {
        lut: [
            0, 111, 128, 139, 147, 154, 159, 164, 169, 173, 176, 180, 183, 186, 189, 191, //
            194, 196, 198, 201, 203, 205, 207, 208, 210, 212, 214, 215, 217, 218, 220, 221, //
            223, 224, 225, 227, 228, 229, 230, 232, 233, 234, 235, 236, 237, 238, 239, 240, //
            242, 242, 243, 244, 245, 246, 247, 248, 249, 250, 251, 252, 253, 253, 254, 255,
        ],
    };

    /// Exponent 0.45
    pub const POW_0_45: Self = Self {
        lut: [
            0, 40, 54, 65, 74, 82, 89, 95, 101, 106, 111, 116, 121, 125, 130, 134, //
            138, 141, 145, 149, 152, 156, 159, 162, 165, 168, 171, 174, 177, 180, 183, 185, //
            188, 191, 193, 196, 198, 201, 203, 206, 208, 210, 212, 215, 217, 219, 221, 224, //
            226, 228, 230, 232, 234, 236, 238, 240, 242, 244, 246, 248, 249, 251, 253, 255,
        ],
    };

    /// Exponent 0.70
    pub const POW_0_70: Self = Self {
        lut: [
            0, 14, 23, 30, 37, 43, 49, 55, 60, 65, 70, 75, 80, 84, 89, 93, //
            98, 102, 106, 110, 114, 118, 122, 126, 130, 134, 137, 141, 145, 148, 152, 155, //
            159, 162, 166, 169, 172, 176, 179, 182, 186, 189, 192, 195, 198, 201, 205, 208, //
            211, 214, 217, 220, 223, 226, 229, 232, 235, 238, 241, 244, 246, 249, 252, 255,
        ],
    };

    /// Exponent 1.80
    pub const POW_1_80: Self = Self {
        lut: [
            0, 0, 1, 1, 2, 3, 4, 5, 6, 8, 9, 11, 13, 15, 17, 19, //
            22, 24, 27, 29, 32, 35, 38, 42, 45, 48, 52, 55, 59, 63, 67, 71, //
            75, 80, 84, 89, 93, 98, 103, 108, 113, 118, 123, 128, 134, 139, 145, 150, //
            156, 162, 168, 174, 181, 187, 193, 200, 206, 213, 220, 227, 234, 241, 248, 255,
        ],
    };

    /// Exponent 3.00
    pub const POW_3_00: Self = Self {
        lut: [
            0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 2, 2, 3, 3, //
            4, 5, 6, 7, 8, 9, 11, 12, 14, 16, 18, 20, 22, 25, 28, 30, //
            33, 37, 40, 44, 48, 52, 56, 60, 65, 70, 76, 81, 87, 93, 99, 106, //
            113, 120, 127, 135, 143, 152, 161, 170, 179, 189, 199, 209, 220, 231, 243, 255,
        ],
    };
}

/// Gamma calibration applied at the end of `init`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gamma {
    /// Leave the controller's power-on gamma untouched
    #[default]
    None,
    /// Select a predefined curve
    Curve(GammaCurve),
    /// Load analog voltage tables
    Analog(AnalogGamma),
    /// Load a digital LUT into the red and/or blue channel and enable it
    Digital {
        /// Lookup table for the selected channels
        table: DigitalGamma,
        /// Apply to the red channel
        red: bool,
        /// Apply to the blue channel
        blue: bool,
    },
}

impl Gamma {
    /// Send the calibration commands
    ///
    /// Returns the number of commands the transport rejected. They are not
    /// retried.
    pub fn apply<IO: PanelIo>(&self, io: &mut IO) -> usize {
        let mut failed = 0;
        match self {
            Gamma::None => {}
            Gamma::Curve(curve) => {
                failed += send(io, commands::GAMSET, &[curve.param()]);
            }
            Gamma::Analog(tables) => {
                failed += send(io, cmd::PVGAMCTRL, &tables.positive);
                failed += send(io, cmd::NVGAMCTRL, &tables.negative);
            }
            Gamma::Digital { table, red, blue } => {
                if *red {
                    failed += send(io, cmd::DGMLUTR, &table.lut);
                }
                if *blue {
                    failed += send(io, cmd::DGMLUTB, &table.lut);
                }
                if *red || *blue {
                    failed += send(io, cmd::DGMEN, &[DGMEN_ON]);
                }
            }
        }
        failed
    }
}

/// Best-effort command write, 1 if it failed
fn send<IO: PanelIo>(io: &mut IO, cmd: u8, params: &[u8]) -> usize {
    match io.tx_param(cmd, params) {
        Ok(()) => 0,
        Err(_) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("st7789: gamma command {=u8:#x} failed, skipped", cmd);
            1
        }
    }
}
