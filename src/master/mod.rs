//! A module to encapsulate the bus master and its hardware contract.
use core::{
    fmt::{Display, Formatter},
    hint,
};

mod bus;
mod config;
mod device;
mod mmio;
pub mod registers;

pub use config::MasterConfig;
pub use device::SpiDeviceHandle;
pub use mmio::MmioRegisters;
use registers::{Control, Status};

use crate::{
    hal::{Lines, Registers},
    types::{Direction, DESELECTED, SELECTED},
};

/// The byte shifted out by [`BusMaster::read()`] while clocking in a response.
pub const FILLER: u8 = 0x00;

/// Errors reported by the bounded exchange and the `embedded-hal` trait implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpiMasterError {
    /// The transfer-complete flag stayed clear for the configured
    /// [`MasterConfig::poll_limit()`] status reads.
    Timeout,
}

#[cfg(feature = "defmt")]
impl defmt::Format for SpiMasterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SpiMasterError::Timeout => defmt::write!(fmt, "Timeout"),
        }
    }
}

impl Display for SpiMasterError {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        match self {
            SpiMasterError::Timeout => write!(f, "transfer did not complete within the poll limit"),
        }
    }
}

impl embedded_hal::spi::Error for SpiMasterError {
    fn kind(&self) -> embedded_hal::spi::ErrorKind {
        embedded_hal::spi::ErrorKind::Other
    }
}

/// The owner of the one physical bus.
///
/// It performs the one-time peripheral initialization, tracks which
/// subordinate device (if any) is currently selected, and exchanges bytes
/// with it.
///
/// Only one select line is tracked. Selecting a device while another one
/// is selected deselects the other one first, so nested selections are not
/// supported: the outer selection is silently dropped.
pub struct BusMaster<REG, LINES: Lines> {
    registers: REG,
    lines: LINES,
    config: MasterConfig<LINES::Pin>,
    initialized: bool,
    selected: Option<LINES::Pin>,
}

impl<REG, LINES> BusMaster<REG, LINES>
where
    REG: Registers,
    LINES: Lines,
{
    /// Take ownership of the peripheral's `registers` and the board's `lines`.
    ///
    /// No hardware is touched until the first call to [`BusMaster::setup()`].
    pub fn new(registers: REG, lines: LINES, config: MasterConfig<LINES::Pin>) -> Self {
        Self {
            registers,
            lines,
            config,
            initialized: false,
            selected: None,
        }
    }

    /// Prepare `select_line` for addressing a subordinate device.
    ///
    /// The first call also initializes the bus: the clock, data-out and
    /// default select lines become outputs, the data-in line an input with
    /// its pull-up enabled, the peripheral is enabled in master mode, and the
    /// status and data registers are read once to discard stale state.
    /// Later calls never repeat that sequence.
    ///
    /// Every call leaves `select_line` deselected. The record of which line
    /// is currently selected is left untouched.
    pub fn setup(&mut self, select_line: LINES::Pin) {
        if !self.initialized {
            self.initialized = true;
            let pins = self.config.pins();
            // SS must be an output before the peripheral is enabled
            self.lines.set_direction(pins.ss, Direction::Output);
            self.lines.set_direction(pins.mosi, Direction::Output);
            self.lines.set_direction(pins.miso, Direction::InputPullUp);
            self.lines.set_direction(pins.sck, Direction::Output);
            self.registers
                .write_control(Control::MASTER_ENABLED.into_bits());
            let _ = self.registers.read_status();
            let _ = self.registers.read_data();
            debug!("spi: bus initialized in master mode");
        }

        if select_line != self.config.pins().ss {
            self.lines.set_direction(select_line, Direction::Output);
        }
        self.lines.set_level(select_line, DESELECTED);
    }

    /// Address the device on `select_line`.
    ///
    /// Whatever line was selected before is driven to its inactive level
    /// first, so two devices are never addressed at once.
    /// [`BusMaster::setup()`] must have been called for `select_line`.
    pub fn select(&mut self, select_line: LINES::Pin) {
        self.deselect();
        self.lines.set_level(select_line, SELECTED);
        self.selected = Some(select_line);
        trace!("spi: line selected");
    }

    /// Release the currently selected device, if any.
    pub fn deselect(&mut self) {
        if let Some(line) = self.selected.take() {
            self.lines.set_level(line, DESELECTED);
            trace!("spi: line deselected");
        }
    }

    /// Send `byte` and return the byte received during the same transfer.
    ///
    /// This busy-waits on the transfer-complete flag with no time limit;
    /// an absent or stalled peripheral blocks forever. Use
    /// [`BusMaster::try_exchange()`] for a bounded wait.
    pub fn exchange(&mut self, byte: u8) -> u8 {
        self.registers.write_data(byte);
        while !self.transfer_complete() {
            hint::spin_loop();
        }
        self.registers.read_data()
    }

    /// Like [`BusMaster::exchange()`], but gives up after
    /// [`MasterConfig::poll_limit()`] unsuccessful status reads.
    ///
    /// Without a poll limit, this never fails.
    pub fn try_exchange(&mut self, byte: u8) -> Result<u8, SpiMasterError> {
        let Some(limit) = self.config.poll_limit() else {
            return Ok(self.exchange(byte));
        };
        self.registers.write_data(byte);
        let mut polls = 0;
        while !self.transfer_complete() {
            polls += 1;
            if polls >= limit {
                warn!("spi: no transfer completion after {} polls", polls);
                return Err(SpiMasterError::Timeout);
            }
            hint::spin_loop();
        }
        Ok(self.registers.read_data())
    }

    /// Send `byte`, discarding the byte received.
    pub fn write(&mut self, byte: u8) {
        self.exchange(byte);
    }

    /// Send [`FILLER`] and return the byte received.
    pub fn read(&mut self) -> u8 {
        self.exchange(FILLER)
    }

    /// Has the one-time bus initialization run?
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// The line currently selected, if any.
    pub fn selected(&self) -> Option<LINES::Pin> {
        self.selected
    }

    pub fn config(&self) -> &MasterConfig<LINES::Pin> {
        &self.config
    }

    /// Give back the registers and lines.
    ///
    /// The hardware is left as is; a selected device stays selected.
    pub fn release(self) -> (REG, LINES) {
        (self.registers, self.lines)
    }

    fn transfer_complete(&mut self) -> bool {
        Status::from_bits(self.registers.read_status()).transfer_complete()
    }
}
