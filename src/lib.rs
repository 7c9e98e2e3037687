//! A blocking SPI master driver with software-controlled chip-select lines.
//!
//! [`BusMaster`] owns the one hardware SPI peripheral of a board. It
//! initializes the peripheral once, keeps at most one subordinate device
//! selected, and exchanges single bytes with it by polling the peripheral's
//! transfer-complete flag.
//!
//! ```
//! use spi_master::{BusMaster, Direction, Level, Lines, MasterConfig, Registers};
//!
//! // A peripheral that answers every byte with 0x42 and a board that ignores
//! // its pins. Real firmware would use `MmioRegisters` and its own pin driver.
//! struct Echo;
//! impl Registers for Echo {
//!     fn write_control(&mut self, _value: u8) {}
//!     fn read_status(&mut self) -> u8 { 0x80 }
//!     fn write_data(&mut self, _byte: u8) {}
//!     fn read_data(&mut self) -> u8 { 0x42 }
//! }
//! struct Pins;
//! impl Lines for Pins {
//!     type Pin = u8;
//!     fn set_direction(&mut self, _pin: u8, _direction: Direction) {}
//!     fn set_level(&mut self, _pin: u8, _level: Level) {}
//! }
//!
//! let mut spi = BusMaster::new(Echo, Pins, MasterConfig::default());
//! spi.setup(5);
//! spi.select(5);
//! spi.write(0xA5);
//! assert_eq!(spi.read(), 0x42);
//! spi.deselect();
//! ```
//!
//! ## Basic API
//!
//! - [`BusMaster::new()`](fn@crate::BusMaster::new)
//! - [`BusMaster::setup()`](fn@crate::BusMaster::setup)
//! - [`BusMaster::select()`](fn@crate::BusMaster::select)
//! - [`BusMaster::deselect()`](fn@crate::BusMaster::deselect)
//! - [`BusMaster::exchange()`](fn@crate::BusMaster::exchange)
//! - [`BusMaster::write()`](fn@crate::BusMaster::write)
//! - [`BusMaster::read()`](fn@crate::BusMaster::read)
//!
//! ## Advanced API
//!
//! - [`BusMaster::try_exchange()`](fn@crate::BusMaster::try_exchange)
//! - [`BusMaster::device()`](fn@crate::BusMaster::device), an `embedded-hal` [`SpiDevice`](embedded_hal::spi::SpiDevice)
//! - [`BusMaster`] as an `embedded-hal` [`SpiBus`](embedded_hal::spi::SpiBus)
//! - [`GlobalBus`], a `static` home for the one bus master
//! - [`MmioRegisters`], the volatile register block
#![no_std]

#[macro_use]
mod fmt;

mod types;
pub use types::{BusPins, Direction, Level, DESELECTED, SELECTED};
mod hal;
pub use hal::{Lines, Registers};
pub mod master;
#[doc(inline)]
pub use master::{
    BusMaster, MasterConfig, MmioRegisters, SpiDeviceHandle, SpiMasterError, FILLER,
};
mod global;
pub use global::GlobalBus;
