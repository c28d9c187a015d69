//! Panel bus abstraction
//!
//! Provides the transport trait panel drivers send controller commands
//! through. Framing (D/C line, chip select, i80 strobes, DMA) is the
//! implementation's concern.

/// Panel I/O transport
///
/// Every controller transaction is a one-byte command followed by an
/// optional data phase. Parameters and pixel payloads are split into two
/// calls because transports usually move pixels differently (DMA, queued
/// transfers) from the few bytes of a register write.
pub trait PanelIo {
    /// Error type for bus operations
    type Error;

    /// Send a command with its parameter bytes
    ///
    /// `params` may be empty, in which case only the command is sent.
    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error>;

    /// Send a command followed by a pixel payload
    ///
    /// The transport must be done with `color` when this returns; callers
    /// are free to reuse the buffer immediately.
    fn tx_color(&mut self, cmd: u8, color: &[u8]) -> Result<(), Self::Error>;
}

impl<T: PanelIo + ?Sized> PanelIo for &mut T {
    type Error = T::Error;

    fn tx_param(&mut self, cmd: u8, params: &[u8]) -> Result<(), Self::Error> {
        T::tx_param(self, cmd, params)
    }

    fn tx_color(&mut self, cmd: u8, color: &[u8]) -> Result<(), Self::Error> {
        T::tx_color(self, cmd, color)
    }
}
