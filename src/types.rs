//! This module defines value types shared by the bus master and the
//! hardware seams it drives.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

/// The direction a digital line is configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// The line is driven by this controller.
    Output,
    /// The line floats unless something else drives it.
    Input,
    /// The line is an input with the internal pull-up enabled,
    /// so it reads high when nothing drives it.
    InputPullUp,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Direction {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Direction::Output => defmt::write!(fmt, "Output"),
            Direction::Input => defmt::write!(fmt, "Input"),
            Direction::InputPullUp => defmt::write!(fmt, "InputPullUp"),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Direction::Output => write!(f, "Output"),
            Direction::Input => write!(f, "Input"),
            Direction::InputPullUp => write!(f, "InputPullUp"),
        }
    }
}

/// A logic level on a digital line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// Select lines are active-low: this level addresses a device.
pub const SELECTED: Level = Level::Low;

/// The idle level of a select line.
pub const DESELECTED: Level = Level::High;

#[cfg(feature = "defmt")]
impl defmt::Format for Level {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Level::Low => defmt::write!(fmt, "Low"),
            Level::High => defmt::write!(fmt, "High"),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Level::Low => write!(f, "Low"),
            Level::High => write!(f, "High"),
        }
    }
}

/// Identifiers of the four lines that make up the physical bus.
///
/// These are fixed for a given board; only the select lines passed to
/// [`BusMaster::setup()`](fn@crate::BusMaster::setup) vary at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusPins<P> {
    /// The clock line (SCK), driven by the master.
    pub sck: P,
    /// The data-out line (MOSI).
    pub mosi: P,
    /// The data-in line (MISO).
    pub miso: P,
    /// The peripheral's own select line (SS).
    ///
    /// On AVR parts this line must be an output before the peripheral is
    /// enabled, otherwise a low level on it drops the peripheral out of master mode.
    pub ss: P,
}

impl BusPins<u8> {
    /// The ATmega328P (Arduino Uno) numbering of the hardware SPI lines.
    pub const ATMEGA328P: BusPins<u8> = BusPins {
        sck: 13,
        mosi: 11,
        miso: 12,
        ss: 10,
    };
}

#[cfg(feature = "defmt")]
impl<P: defmt::Format> defmt::Format for BusPins<P> {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "BusPins(sck={}, mosi={}, miso={}, ss={})",
            self.sck,
            self.mosi,
            self.miso,
            self.ss
        )
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{BusPins, Direction, Level, DESELECTED, SELECTED};
    use std::{format, string::String};

    #[test]
    fn select_levels_are_active_low() {
        assert_eq!(SELECTED, Level::Low);
        assert_eq!(DESELECTED, Level::High);
    }

    #[test]
    fn atmega_pins() {
        let pins = BusPins::ATMEGA328P;
        assert_eq!((pins.ss, pins.mosi, pins.miso, pins.sck), (10, 11, 12, 13));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Direction::InputPullUp), String::from("InputPullUp"));
        assert_eq!(format!("{}", Direction::Output), String::from("Output"));
        assert_eq!(format!("{}", Direction::Input), String::from("Input"));
        assert_eq!(format!("{}", Level::High), String::from("High"));
        assert_eq!(format!("{}", Level::Low), String::from("Low"));
    }
}
