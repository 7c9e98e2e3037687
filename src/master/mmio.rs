use core::ptr;

use crate::hal::Registers;

/// The peripheral's register block accessed through volatile reads and writes.
pub struct MmioRegisters {
    control: *mut u8,
    status: *mut u8,
    data: *mut u8,
}

// SAFETY: the contract of `new()` makes this the only accessor of the
// registers, so moving it to another context cannot create aliased access.
unsafe impl Send for MmioRegisters {}

impl MmioRegisters {
    /// Data-space addresses of SPCR, SPSR and SPDR on the ATmega328P.
    pub const ATMEGA328P: (usize, usize, usize) = (0x4C, 0x4D, 0x4E);

    /// Wrap the control, status and data registers found at the given addresses.
    ///
    /// # Safety
    ///
    /// Each address must be valid for volatile byte reads and writes for the
    /// lifetime of the returned object, and nothing else may access these
    /// registers while it exists.
    pub unsafe fn new(control: usize, status: usize, data: usize) -> Self {
        Self {
            control: control as *mut u8,
            status: status as *mut u8,
            data: data as *mut u8,
        }
    }

    /// Wrap the ATmega328P SPI registers.
    ///
    /// # Safety
    ///
    /// Only sound on an ATmega328P, with no other owner of the SPI registers.
    pub unsafe fn atmega328p() -> Self {
        let (control, status, data) = Self::ATMEGA328P;
        Self::new(control, status, data)
    }
}

impl Registers for MmioRegisters {
    fn write_control(&mut self, value: u8) {
        // SAFETY: validity of the address is upheld by the contract of `new()`.
        unsafe { ptr::write_volatile(self.control, value) }
    }

    fn read_status(&mut self) -> u8 {
        // SAFETY: see `write_control()`.
        unsafe { ptr::read_volatile(self.status) }
    }

    fn write_data(&mut self, byte: u8) {
        // SAFETY: see `write_control()`.
        unsafe { ptr::write_volatile(self.data, byte) }
    }

    fn read_data(&mut self) -> u8 {
        // SAFETY: see `write_control()`.
        unsafe { ptr::read_volatile(self.data) }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::MmioRegisters;
    use crate::hal::Registers;

    #[test]
    fn volatile_access() {
        let mut block = [0u8; 3];
        let base = block.as_mut_ptr() as usize;
        {
            // SAFETY: the three addresses point into `block`, which outlives `regs`.
            let mut regs = unsafe { MmioRegisters::new(base, base + 1, base + 2) };
            regs.write_control(0x50);
            regs.write_data(0xA5);
            assert_eq!(regs.read_status(), 0);
            assert_eq!(regs.read_data(), 0xA5);
        }
        assert_eq!(block, [0x50, 0, 0xA5]);
    }
}
