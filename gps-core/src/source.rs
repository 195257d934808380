//! Byte source trait and error types.

use core::future::Future;

/// Error type for transport read operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SourceError {
    /// UART/communication I/O error.
    Io,
    /// UART framing error.
    Framing,
    /// Receive FIFO overrun (data was lost upstream).
    Overrun,
}

/// Async trait for raw byte stream sources.
///
/// This trait abstracts the transport a GPS receiver is attached to,
/// allowing different implementations (UART, USB CDC, a recorded capture)
/// to be used interchangeably. The assembler does not distinguish a
/// disconnected transport from an idle one: an error and an empty read both
/// count as "nothing available right now".
///
/// # `no_std` Compatibility
///
/// All implementations must be `#![no_std]` compatible with no heap allocation.
pub trait ByteSource {
    /// Read whatever bytes are currently available, up to `buf.len()`.
    ///
    /// Returns the number of bytes copied into `buf`; `Ok(0)` means nothing
    /// is available right now. Must not wait indefinitely for data.
    fn read(&mut self, buf: &mut [u8]) -> impl Future<Output = Result<usize, SourceError>>;

    /// Pause before the next read attempt after an empty read.
    ///
    /// The fixed per-attempt delay of the assembly loop. Implementations
    /// backed by real hardware sleep here; test doubles return immediately.
    fn retry_delay(&mut self) -> impl Future<Output = ()>;
}
