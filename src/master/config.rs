use crate::types::BusPins;

/// A struct to describe the board wiring and busy-wait policy of a
/// [`BusMaster`](struct@crate::BusMaster).
///
/// ```
/// use spi_master::{BusPins, MasterConfig};
///
/// let config = MasterConfig::<u8>::default().with_poll_limit(Some(10_000));
/// assert_eq!(config.pins(), BusPins::ATMEGA328P);
/// assert_eq!(config.poll_limit(), Some(10_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasterConfig<P> {
    pins: BusPins<P>,
    poll_limit: Option<u32>,
}

impl Default for MasterConfig<u8> {
    /// ATmega328P wiring, no poll limit.
    fn default() -> Self {
        Self::new(BusPins::ATMEGA328P)
    }
}

impl<P: Copy> MasterConfig<P> {
    /// Create a config for the given bus lines with no poll limit.
    pub const fn new(pins: BusPins<P>) -> Self {
        Self {
            pins,
            poll_limit: None,
        }
    }

    /// The four fixed bus lines.
    pub const fn pins(&self) -> BusPins<P> {
        self.pins
    }

    /// Replace the four fixed bus lines.
    pub fn with_pins(self, pins: BusPins<P>) -> Self {
        Self { pins, ..self }
    }

    /// How many times a bounded exchange polls the status register before
    /// giving up. `None` means it waits as long as the hardware takes.
    pub const fn poll_limit(&self) -> Option<u32> {
        self.poll_limit
    }

    /// Set the limit used by
    /// [`BusMaster::try_exchange()`](fn@crate::BusMaster::try_exchange)
    /// and the `embedded-hal` trait implementations.
    ///
    /// [`BusMaster::exchange()`](fn@crate::BusMaster::exchange) ignores this
    /// limit and always blocks until the transfer completes.
    pub fn with_poll_limit(self, poll_limit: Option<u32>) -> Self {
        Self { poll_limit, ..self }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    use super::MasterConfig;
    use crate::BusPins;

    #[test]
    fn defaults() {
        let config = MasterConfig::<u8>::default();
        assert_eq!(config.pins(), BusPins::ATMEGA328P);
        assert_eq!(config.poll_limit(), None);
    }

    #[test]
    fn builders() {
        let pins = BusPins {
            sck: 52,
            mosi: 51,
            miso: 50,
            ss: 53,
        };
        let config = MasterConfig::<u8>::default()
            .with_poll_limit(Some(3))
            .with_pins(pins);
        assert_eq!(config.pins(), pins);
        assert_eq!(config.poll_limit(), Some(3));
        assert_eq!(config.with_poll_limit(None).poll_limit(), None);
    }
}
