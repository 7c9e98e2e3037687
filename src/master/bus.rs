use embedded_hal::spi::{ErrorType, SpiBus};

use super::{BusMaster, SpiMasterError, FILLER};
use crate::hal::{Lines, Registers};

impl<REG, LINES> ErrorType for BusMaster<REG, LINES>
where
    REG: Registers,
    LINES: Lines,
{
    type Error = SpiMasterError;
}

/// The bus as a whole, driven one byte at a time.
///
/// Chip-select is not touched here; see
/// [`BusMaster::device()`](fn@crate::BusMaster::device) for that.
/// Every byte goes through [`BusMaster::try_exchange()`], so the configured
/// poll limit applies.
impl<REG, LINES> SpiBus<u8> for BusMaster<REG, LINES>
where
    REG: Registers,
    LINES: Lines,
{
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for word in words.iter_mut() {
            *word = self.try_exchange(FILLER)?;
        }
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for word in words {
            self.try_exchange(*word)?;
        }
        Ok(())
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        let len = read.len().max(write.len());
        for i in 0..len {
            let received = self.try_exchange(write.get(i).copied().unwrap_or(FILLER))?;
            if let Some(word) = read.get_mut(i) {
                *word = received;
            }
        }
        Ok(())
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        for word in words.iter_mut() {
            *word = self.try_exchange(*word)?;
        }
        Ok(())
    }

    /// Every exchange has already completed by the time it returns.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
