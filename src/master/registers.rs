use bitfield_struct::bitfield;

/// Bit mnemonics of the control (SPCR) and status (SPSR) registers.
pub mod mnemonics {
    pub const SPIE: u8 = 1 << 7;
    pub const SPE: u8 = 1 << 6;
    pub const DORD: u8 = 1 << 5;
    pub const MSTR: u8 = 1 << 4;
    pub const CPOL: u8 = 1 << 3;
    pub const CPHA: u8 = 1 << 2;
    pub const SPR1: u8 = 1 << 1;
    pub const SPR0: u8 = 1;

    pub const SPIF: u8 = 1 << 7;
    pub const WCOL: u8 = 1 << 6;
    pub const SPI2X: u8 = 1;
}

/// The control register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct Control {
    /// Raise an interrupt when a transfer completes.
    pub interrupt_enable: bool,

    /// Enable the peripheral.
    pub enable: bool,

    /// Shift the least significant bit out first.
    pub lsb_first: bool,

    /// Drive the clock and initiate transfers.
    pub master: bool,

    /// Clock idles high.
    pub clock_polarity: bool,

    /// Sample on the trailing clock edge.
    pub clock_phase: bool,

    /// Clock divider selection.
    #[bits(2)]
    pub clock_rate: u8,
}

impl Control {
    /// The value written once at bus initialization: peripheral enabled in
    /// master mode, every other bit at its reset value.
    pub const MASTER_ENABLED: Control = Control::new().with_enable(true).with_master(true);
}

/// The status register.
#[bitfield(u8, order = Msb)]
#[derive(PartialEq, Eq)]
pub struct Status {
    /// Set by hardware when a transfer completes.
    pub transfer_complete: bool,

    /// Set when the data register was written during a transfer.
    pub write_collision: bool,

    #[bits(5)]
    _reserved: u8,

    /// Double the clock rate.
    pub double_speed: bool,
}
