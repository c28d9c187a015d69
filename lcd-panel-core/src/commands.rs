//! MIPI DCS command codes shared by most TFT controllers
//!
//! Controller-specific extensions (gamma tables and the like) live next to
//! the driver that uses them.

/// Software reset
pub const SWRESET: u8 = 0x01;
/// Exit sleep mode
pub const SLPOUT: u8 = 0x11;
/// Display inversion off
pub const INVOFF: u8 = 0x20;
/// Display inversion on
pub const INVON: u8 = 0x21;
/// Select predefined gamma curve
pub const GAMSET: u8 = 0x26;
/// Display off
pub const DISPOFF: u8 = 0x28;
/// Display on
pub const DISPON: u8 = 0x29;
/// Column address set
pub const CASET: u8 = 0x2A;
/// Row address set
pub const RASET: u8 = 0x2B;
/// Memory write
pub const RAMWR: u8 = 0x2C;
/// Memory data access control
pub const MADCTL: u8 = 0x36;
/// Interface pixel format
pub const COLMOD: u8 = 0x3A;

/// MADCTL bit flags
pub mod madctl {
    /// Row address order (mirror Y)
    pub const MY: u8 = 0x80;
    /// Column address order (mirror X)
    pub const MX: u8 = 0x40;
    /// Row/column exchange (swap axes)
    pub const MV: u8 = 0x20;
    /// BGR color filter panel
    pub const BGR: u8 = 0x08;
}

/// Encode an inclusive address range as the four parameter bytes of
/// `CASET`/`RASET`: start high, start low, end high, end low.
pub const fn address_range(start: u16, end_inclusive: u16) -> [u8; 4] {
    let [start_hi, start_lo] = start.to_be_bytes();
    let [end_hi, end_lo] = end_inclusive.to_be_bytes();
    [start_hi, start_lo, end_hi, end_lo]
}
