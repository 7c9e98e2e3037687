//! A home for the one [`BusMaster`] that code anywhere in the firmware can reach.
use core::cell::RefCell;

use critical_section::Mutex;

use crate::{
    hal::{Lines, Registers},
    master::BusMaster,
};

/// Holds the board's single [`BusMaster`] in a `static`.
///
/// The holder starts empty. [`GlobalBus::install()`] moves a bus master in
/// exactly once; after that, [`GlobalBus::with()`] lends it out inside a
/// critical section.
///
/// ```
/// use spi_master::{BusMaster, Direction, GlobalBus, Level, Lines, MasterConfig, Registers};
/// # struct Regs;
/// # impl Registers for Regs {
/// #     fn write_control(&mut self, _value: u8) {}
/// #     fn read_status(&mut self) -> u8 { 0x80 }
/// #     fn write_data(&mut self, _byte: u8) {}
/// #     fn read_data(&mut self) -> u8 { 0 }
/// # }
/// # struct Pins;
/// # impl Lines for Pins {
/// #     type Pin = u8;
/// #     fn set_direction(&mut self, _pin: u8, _direction: Direction) {}
/// #     fn set_level(&mut self, _pin: u8, _level: Level) {}
/// # }
///
/// static SPI: GlobalBus<Regs, Pins> = GlobalBus::new();
///
/// assert!(SPI.install(BusMaster::new(Regs, Pins, MasterConfig::default())).is_ok());
/// SPI.with(|spi| {
///     spi.setup(5);
///     spi.select(5);
///     spi.write(0x9F);
///     spi.deselect();
/// });
/// ```
pub struct GlobalBus<REG, LINES: Lines> {
    inner: Mutex<RefCell<Option<BusMaster<REG, LINES>>>>,
}

impl<REG, LINES: Lines> GlobalBus<REG, LINES> {
    /// Create an empty holder.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }
}

impl<REG, LINES: Lines> Default for GlobalBus<REG, LINES> {
    fn default() -> Self {
        Self::new()
    }
}

impl<REG, LINES> GlobalBus<REG, LINES>
where
    REG: Registers,
    LINES: Lines,
{
    /// Move `master` into the holder.
    ///
    /// Only the first call succeeds; later calls hand their bus master back
    /// untouched.
    pub fn install(&self, master: BusMaster<REG, LINES>) -> Result<(), BusMaster<REG, LINES>> {
        critical_section::with(|cs| {
            let mut slot = self.inner.borrow_ref_mut(cs);
            if slot.is_some() {
                return Err(master);
            }
            *slot = Some(master);
            debug!("spi: bus master installed");
            Ok(())
        })
    }

    /// Has a bus master been installed?
    pub fn is_installed(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow_ref(cs).is_some())
    }

    /// Run `f` on the installed bus master inside a critical section.
    ///
    /// Returns `None` if nothing has been installed yet. Calling `with()`
    /// again from inside `f` panics.
    ///
    /// Interrupts stay masked while `f` runs, including while
    /// [`BusMaster::exchange()`] spins on a transfer that never completes.
    /// To bound that wait, configure a limit with
    /// [`MasterConfig::with_poll_limit()`](fn@crate::MasterConfig::with_poll_limit)
    /// and use [`BusMaster::try_exchange()`] inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut BusMaster<REG, LINES>) -> R) -> Option<R> {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).as_mut().map(f))
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::GlobalBus;
    use crate::test::{mk_master, Board, Event};

    #[test]
    fn empty_until_installed() {
        let bus: GlobalBus<Board, Board> = GlobalBus::new();
        assert!(!bus.is_installed());
        assert_eq!(bus.with(|spi| spi.read()), None);
    }

    #[test]
    fn install_once() {
        let bus = GlobalBus::default();
        let (first, board) = mk_master(None);
        let (second, _) = mk_master(Some(7));
        assert!(bus.install(first).is_ok());
        assert!(bus.is_installed());
        let rejected = bus.install(second).err();
        assert_eq!(
            rejected.map(|spi| spi.config().poll_limit()),
            Some(Some(7))
        );
        assert_eq!(bus.with(|spi| spi.config().poll_limit()), Some(None));

        board.set_default_response(0x24);
        let received = bus.with(|spi| {
            spi.setup(3);
            spi.select(3);
            let byte = spi.read();
            spi.deselect();
            byte
        });
        assert_eq!(received, Some(0x24));
        assert!(board.log().contains(&Event::DataRead(0x24)));
        assert_eq!(bus.with(|spi| spi.selected()), Some(None));
    }
}
