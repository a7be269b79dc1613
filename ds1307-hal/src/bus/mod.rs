//! Byte-transfer capability the driver is built on.
//!
//! The driver never touches a bus peripheral directly. It talks to a
//! [`Transfer`] implementation that moves raw bytes to and from a 7-bit bus
//! address, which keeps the register logic independent of any particular HAL
//! and lets tests substitute a simulated device.

mod i2c;
pub use i2c::I2cTransfer;

/// 7-bit I2C address of the DS1307.
///
/// The R/W bit is appended by the transfer implementation.
pub const DS1307_ADDRESS: u8 = 0x68;

/// Timeout handed to the transfer capability for every transaction, in milliseconds.
pub const TRANSFER_TIMEOUT_MS: u32 = 100;

/// Transfer error type trait.
///
/// This just defines the error type, to be used by the other traits.
/// Errors are expressed with the `embedded-hal` I2C error vocabulary so that
/// generic code can inspect [`embedded_hal::i2c::Error::kind`] regardless of
/// which bus sits underneath.
pub trait ErrorType {
    /// Error type
    type Error: embedded_hal::i2c::Error;
}

impl<T: ErrorType + ?Sized> ErrorType for &mut T {
    type Error = T::Error;
}

/// Blocking byte-transfer capability.
///
/// Each call is one complete bus transaction (start, address, payload, stop)
/// and blocks until it completes or `timeout_ms` elapses. Implementations
/// report failures through their error type; nothing above this trait retries.
pub trait Transfer: ErrorType {
    /// Write `bytes` to the device at `address` in a single transaction.
    fn transmit(&mut self, address: u8, bytes: &[u8], timeout_ms: u32) -> Result<(), Self::Error>;

    /// Fill `buffer` from the device at `address` in a single transaction.
    fn receive(&mut self, address: u8, buffer: &mut [u8], timeout_ms: u32) -> Result<(), Self::Error>;
}

impl<T: Transfer + ?Sized> Transfer for &mut T {
    #[inline]
    fn transmit(&mut self, address: u8, bytes: &[u8], timeout_ms: u32) -> Result<(), Self::Error> {
        T::transmit(self, address, bytes, timeout_ms)
    }

    #[inline]
    fn receive(&mut self, address: u8, buffer: &mut [u8], timeout_ms: u32) -> Result<(), Self::Error> {
        T::receive(self, address, buffer, timeout_ms)
    }
}
