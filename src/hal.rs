//! The hardware the bus master drives, expressed as two traits.
//!
//! Neither trait reports failure: the peripheral and the pin controller
//! have no failure signal the master could observe.

use crate::types::{Direction, Level};

/// The peripheral's memory-mapped register block.
///
/// The master's whole contract with it is: write the data register,
/// poll the status register, read the data register.
pub trait Registers {
    /// Write the control register (peripheral enable, master mode).
    fn write_control(&mut self, value: u8);

    /// Read the status register.
    ///
    /// On AVR parts, reading the status register while the transfer-complete
    /// flag is set arms the flag to clear on the next data register access.
    fn read_status(&mut self) -> u8;

    /// Write the data register, which starts a full-duplex transfer.
    fn write_data(&mut self, byte: u8);

    /// Read the byte shifted in by the last transfer.
    fn read_data(&mut self) -> u8;
}

/// Direction and level control of the board's digital lines.
pub trait Lines {
    /// How the board names a line.
    type Pin: Copy + PartialEq;

    /// Configure `pin` as an output or an input.
    fn set_direction(&mut self, pin: Self::Pin, direction: Direction);

    /// Drive `pin` to `level`. Only called for pins configured as outputs.
    fn set_level(&mut self, pin: Self::Pin, level: Level);
}

impl<T: Registers + ?Sized> Registers for &mut T {
    fn write_control(&mut self, value: u8) {
        T::write_control(self, value)
    }

    fn read_status(&mut self) -> u8 {
        T::read_status(self)
    }

    fn write_data(&mut self, byte: u8) {
        T::write_data(self, byte)
    }

    fn read_data(&mut self) -> u8 {
        T::read_data(self)
    }
}

impl<T: Lines + ?Sized> Lines for &mut T {
    type Pin = T::Pin;

    fn set_direction(&mut self, pin: Self::Pin, direction: Direction) {
        T::set_direction(self, pin, direction)
    }

    fn set_level(&mut self, pin: Self::Pin, level: Level) {
        T::set_level(self, pin, level)
    }
}
