use embedded_hal::i2c::I2c;

use super::{ErrorType, Transfer};

/// [`Transfer`] over any blocking `embedded-hal` I2C bus.
///
/// `embedded-hal` buses apply their own timeout policy, configured when the
/// peripheral is created, so the per-call timeout is not forwarded.
#[derive(Debug)]
pub struct I2cTransfer<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> I2cTransfer<I2C> {
    /// Wrap an I2C bus.
    pub const fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Give the wrapped bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> ErrorType for I2cTransfer<I2C> {
    type Error = I2C::Error;
}

impl<I2C: I2c> Transfer for I2cTransfer<I2C> {
    fn transmit(&mut self, address: u8, bytes: &[u8], timeout_ms: u32) -> Result<(), Self::Error> {
        trace!("i2c write addr={=u8:#x} len={=usize} timeout={=u32}ms", address, bytes.len(), timeout_ms);
        self.i2c.write(address, bytes)
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8], timeout_ms: u32) -> Result<(), Self::Error> {
        trace!("i2c read addr={=u8:#x} len={=usize} timeout={=u32}ms", address, buffer.len(), timeout_ms);
        self.i2c.read(address, buffer)
    }
}
