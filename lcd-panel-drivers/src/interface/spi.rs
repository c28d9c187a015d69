//! 4-wire SPI panel bus
//!
//! The common "4-line serial" wiring: SCK, MOSI and CS on an
//! [`SpiDevice`], plus a D/C pin that is low while the command byte is
//! clocked out and high for its parameters or pixel data.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use lcd_panel_hal::PanelIo;

/// Errors from the SPI bus or the D/C pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiIoError<S, P> {
    /// SPI transfer failed
    Spi(S),
    /// D/C pin could not be driven
    Dc(P),
}

/// Panel bus over an SPI device and a data/command pin
pub struct SpiPanelIo<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiPanelIo<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    /// Create a new SPI panel bus
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give back the SPI device and D/C pin
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    /// Send a command byte (D/C low)
    fn write_command(&mut self, cmd: u8) -> Result<(), SpiIoError<SPI::Error, DC::Error>> {
        self.dc.set_low().map_err(SpiIoError::Dc)?;
        self.spi.write(&[cmd]).map_err(SpiIoError::Spi)
    }

    /// Send data bytes (D/C high), skipped when empty
    fn write_data(&mut self, data: &[u8]) -> Result<(), SpiIoError<SPI::Error, DC::Error>> {
        if data.is_empty() {
            return Ok(());
        }
        self.dc.set_high().map_err(SpiIoError::Dc)?;
        self.spi.write(data).map_err(SpiIoError::Spi)
    }
}

impl<SPI, DC> PanelIo for SpiPanelIo<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = SpiIoError<SPI::Error, DC::Error>;

    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
        self.write_command(cmd)?;
        self.write_data(params)
    }

    fn tx_color(&mut self, cmd: u8, color: &[u8]) -> Result<(), Self::Error> {
        self.write_command(cmd)?;
        self.write_data(color)
    }
}
