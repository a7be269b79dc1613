use crate::bus::{Transfer, TRANSFER_TIMEOUT_MS};
use crate::register::Register;

/// Runs every transfer of a register sequence and keeps the first error.
///
/// A failed step yields `V::default()` so the sequence can go on; the error
/// is reported once the whole sequence has been issued.
#[derive(Debug)]
pub(crate) struct FirstError<E> {
    error: Option<E>,
}

impl<E> FirstError<E> {
    pub(crate) const fn new() -> Self {
        Self { error: None }
    }

    pub(crate) fn step<V: Default>(&mut self, result: Result<V, E>) -> V {
        match result {
            Ok(value) => value,
            Err(e) => {
                if self.error.is_none() {
                    self.error = Some(e);
                }
                V::default()
            }
        }
    }

    pub(crate) fn finish<V>(self, value: V) -> Result<V, E> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(value),
        }
    }
}

/// A transfer capability bound to one device address.
///
/// Reads use the register-pointer protocol: one transaction writes the
/// register address, a second one reads the byte back. The pair is not
/// atomic, so callers sharing the bus must serialize access around it.
#[derive(Debug)]
pub struct Device<T> {
    transfer: T,
    address: u8,
}

impl<T: Transfer> Device<T> {
    /// Bind `transfer` to the device at the 7-bit `address`.
    pub const fn new(transfer: T, address: u8) -> Self {
        Self { transfer, address }
    }

    /// The 7-bit bus address this handle talks to.
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Write `value` to `register` in one `[address, value]` transaction.
    pub fn write_register(&mut self, register: Register, value: u8) -> Result<(), T::Error> {
        trace!("write {} <- {=u8:#x}", register, value);
        self.transfer
            .transmit(self.address, &[register.addr(), value], TRANSFER_TIMEOUT_MS)
    }

    /// Point the device at `register`, then read one byte back.
    ///
    /// The read is issued even if the pointer write failed; the first error
    /// of the two is returned.
    pub fn read_register(&mut self, register: Register) -> Result<u8, T::Error> {
        let mut outcome = FirstError::new();
        outcome.step(
            self.transfer
                .transmit(self.address, &[register.addr()], TRANSFER_TIMEOUT_MS),
        );

        let mut data = [0u8];
        outcome.step(self.transfer.receive(self.address, &mut data, TRANSFER_TIMEOUT_MS));
        trace!("read {} -> {=u8:#x}", register, data[0]);

        outcome.finish(data[0])
    }

    /// Give the transfer capability back.
    pub fn release(self) -> T {
        self.transfer
    }
}
