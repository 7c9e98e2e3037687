use embedded_hal::{
    delay::DelayNs,
    spi::{ErrorType, Operation, SpiBus, SpiDevice},
};

use super::{BusMaster, SpiMasterError};
use crate::hal::{Lines, Registers};

/// One subordinate device on a [`BusMaster`], usable wherever an
/// `embedded-hal` [`SpiDevice`] is expected.
///
/// Every transaction selects the device's line, runs the operations, and
/// deselects it again, also when an operation fails.
pub struct SpiDeviceHandle<'a, REG, LINES: Lines, DELAY> {
    master: &'a mut BusMaster<REG, LINES>,
    select_line: LINES::Pin,
    delay_impl: DELAY,
}

impl<REG, LINES> BusMaster<REG, LINES>
where
    REG: Registers,
    LINES: Lines,
{
    /// Borrow the bus as the device on `select_line`.
    ///
    /// The line is prepared with [`BusMaster::setup()`], so this also
    /// initializes the bus if nothing else has. `delay_impl` serves the
    /// [`Operation::DelayNs`] steps of a transaction.
    pub fn device<DELAY: DelayNs>(
        &mut self,
        select_line: LINES::Pin,
        delay_impl: DELAY,
    ) -> SpiDeviceHandle<'_, REG, LINES, DELAY> {
        self.setup(select_line);
        SpiDeviceHandle {
            master: self,
            select_line,
            delay_impl,
        }
    }
}

impl<REG, LINES, DELAY> SpiDeviceHandle<'_, REG, LINES, DELAY>
where
    REG: Registers,
    LINES: Lines,
    DELAY: DelayNs,
{
    /// The line selected for the duration of each transaction.
    pub fn select_line(&self) -> LINES::Pin {
        self.select_line
    }

    fn run(&mut self, operation: &mut Operation<'_, u8>) -> Result<(), SpiMasterError> {
        match operation {
            Operation::Read(words) => SpiBus::read(&mut *self.master, words),
            Operation::Write(words) => SpiBus::write(&mut *self.master, words),
            Operation::Transfer(read, write) => SpiBus::transfer(&mut *self.master, read, write),
            Operation::TransferInPlace(words) => {
                SpiBus::transfer_in_place(&mut *self.master, words)
            }
            Operation::DelayNs(ns) => {
                self.delay_impl.delay_ns(*ns);
                Ok(())
            }
        }
    }
}

impl<REG, LINES, DELAY> ErrorType for SpiDeviceHandle<'_, REG, LINES, DELAY>
where
    REG: Registers,
    LINES: Lines,
    DELAY: DelayNs,
{
    type Error = SpiMasterError;
}

impl<REG, LINES, DELAY> SpiDevice<u8> for SpiDeviceHandle<'_, REG, LINES, DELAY>
where
    REG: Registers,
    LINES: Lines,
    DELAY: DelayNs,
{
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        self.master.select(self.select_line);
        let result = operations.iter_mut().try_for_each(|op| self.run(op));
        self.master.deselect();
        result
    }
}
