//! Simulated DS1307 register file for driver tests.

use embedded_hal::i2c::ErrorKind;

use crate::bus::{ErrorType, Transfer, DS1307_ADDRESS};
use crate::register::Register;

/// Size of the DS1307 address space (timekeeping, control and RAM).
const REGISTER_SPACE: usize = 64;

#[derive(PartialEq, Debug, Clone)]
pub enum Transaction {
    Transmit(Vec<u8>),
    Receive(usize),
}

/// Behaves like the chip: the first written byte loads the register pointer,
/// further bytes are stored at the pointer, and both directions advance the
/// pointer with wrap-around.
pub struct SimDs1307 {
    registers: [u8; REGISTER_SPACE],
    pointer: usize,
    log: Vec<Transaction>,
    addresses: Vec<u8>,
    timeouts: Vec<u32>,
    fail_next: bool,
}

impl SimDs1307 {
    pub fn new() -> Self {
        Self {
            registers: [0; REGISTER_SPACE],
            pointer: 0,
            log: Vec::new(),
            addresses: Vec::new(),
            timeouts: Vec::new(),
            fail_next: false,
        }
    }

    /// Start with the seven timekeeping registers preloaded.
    pub fn with_registers(timekeeping: [u8; 7]) -> Self {
        let mut sim = Self::new();
        sim.registers[..7].copy_from_slice(&timekeeping);
        sim
    }

    pub fn register(&self, register: Register) -> u8 {
        self.registers[register.addr() as usize]
    }

    pub fn set_register(&mut self, register: Register, value: u8) {
        self.registers[register.addr() as usize] = value;
    }

    pub fn log(&self) -> &[Transaction] {
        &self.log
    }

    /// Register addresses written by single-byte pointer transactions, in order.
    pub fn registers_read(&self) -> Vec<u8> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Transmit(bytes) if bytes.len() == 1 => Some(bytes[0]),
                _ => None,
            })
            .collect()
    }

    /// `(register, value)` pairs from two-byte write transactions, in order.
    pub fn registers_written(&self) -> Vec<(u8, u8)> {
        self.log
            .iter()
            .filter_map(|t| match t {
                Transaction::Transmit(bytes) if bytes.len() == 2 => Some((bytes[0], bytes[1])),
                _ => None,
            })
            .collect()
    }

    pub fn addresses_seen(&self) -> &[u8] {
        &self.addresses
    }

    pub fn timeouts_seen(&self) -> &[u32] {
        &self.timeouts
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
        self.addresses.clear();
        self.timeouts.clear();
    }

    /// Make the next transaction fail without touching the registers.
    pub fn fail_next(&mut self) {
        self.fail_next = true;
    }

    fn begin(&mut self, address: u8, timeout_ms: u32) -> Result<(), ErrorKind> {
        if core::mem::take(&mut self.fail_next) {
            return Err(ErrorKind::Other);
        }
        if address != DS1307_ADDRESS {
            return Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address));
        }
        self.addresses.push(address);
        self.timeouts.push(timeout_ms);
        Ok(())
    }
}

impl ErrorType for SimDs1307 {
    type Error = ErrorKind;
}

impl Transfer for SimDs1307 {
    fn transmit(&mut self, address: u8, bytes: &[u8], timeout_ms: u32) -> Result<(), Self::Error> {
        self.begin(address, timeout_ms)?;
        self.log.push(Transaction::Transmit(bytes.to_vec()));

        if let Some((&pointer, data)) = bytes.split_first() {
            self.pointer = pointer as usize % REGISTER_SPACE;
            for &byte in data {
                self.registers[self.pointer] = byte;
                self.pointer = (self.pointer + 1) % REGISTER_SPACE;
            }
        }
        Ok(())
    }

    fn receive(&mut self, address: u8, buffer: &mut [u8], timeout_ms: u32) -> Result<(), Self::Error> {
        self.begin(address, timeout_ms)?;
        self.log.push(Transaction::Receive(buffer.len()));

        for byte in buffer.iter_mut() {
            *byte = self.registers[self.pointer];
            self.pointer = (self.pointer + 1) % REGISTER_SPACE;
        }
        Ok(())
    }
}
