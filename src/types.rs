//! This module defines types used by various traits.
//! These types are meant to be agnostic of the register layout beneath them.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Power Amplifier level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaLevel {
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -18 dBm | -6 dBm | -12 dBm |
    Min,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -12 dBm | 0 dBm | -4 dBm |
    Low,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | -6 dBm | 3 dBm | 1 dBm |
    High,
    /// | nRF24L01 | Si24R1 with<br>LNA Enabled | Si24R1 with<br>LNA Disabled |
    /// | :-------:|:--------------------------:|:---------------------------:|
    /// | 0 dBm | 7 dBm | 4 dBm |
    Max,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PaLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PaLevel::Min => defmt::write!(fmt, "Min"),
            PaLevel::Low => defmt::write!(fmt, "Low"),
            PaLevel::High => defmt::write!(fmt, "High"),
            PaLevel::Max => defmt::write!(fmt, "Max"),
        }
    }
}

impl PaLevel {
    /// The RF_PWR bits of the RF_SETUP register.
    pub(crate) const MASK: u8 = 6;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PaLevel::Min => 0,
            PaLevel::Low => 2,
            PaLevel::High => 4,
            PaLevel::Max => 6,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 => PaLevel::Min,
            2 => PaLevel::Low,
            4 => PaLevel::High,
            _ => PaLevel::Max,
        }
    }
}

impl Display for PaLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PaLevel::Min => write!(f, "Min"),
            PaLevel::Low => write!(f, "Low"),
            PaLevel::High => write!(f, "High"),
            PaLevel::Max => write!(f, "Max"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DataRate {
    /// represents 1 Mbps
    Mbps1,
    /// represents 2 Mbps
    Mbps2,
    /// represents 250 Kbps
    Kbps250,
}

impl DataRate {
    /// The RF_DR_LOW and RF_DR_HIGH bits of the RF_SETUP register.
    pub(crate) const MASK: u8 = 0x28;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            DataRate::Mbps1 => 0,
            DataRate::Mbps2 => 0x8,
            DataRate::Kbps250 => 0x20,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0x8 => DataRate::Mbps2,
            0x20 => DataRate::Kbps250,
            _ => DataRate::Mbps1,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Mbps1 => defmt::write!(fmt, "1 Mbps"),
            DataRate::Mbps2 => defmt::write!(fmt, "2 Mbps"),
            DataRate::Kbps250 => defmt::write!(fmt, "250 Kbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Mbps1 => write!(f, "1 Mbps"),
            DataRate::Mbps2 => write!(f, "2 Mbps"),
            DataRate::Kbps250 => write!(f, "250 Kbps"),
        }
    }
}

/// The length of a CRC checksum that is used (if any).
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CrcLength {
    /// represents no CRC checksum is used
    Disabled,
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    /// The EN_CRC and CRCO bits of the CONFIG register.
    pub(crate) const MASK: u8 = 0xC;

    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            CrcLength::Disabled => 0,
            CrcLength::Bit8 => 8,
            CrcLength::Bit16 => 12,
        }
    }

    /// CRCO is ignored by the chip while EN_CRC is clear.
    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & Self::MASK {
            0 | 4 => CrcLength::Disabled,
            8 => CrcLength::Bit8,
            _ => CrcLength::Bit16,
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Disabled => defmt::write!(fmt, "disabled"),
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Disabled => write!(f, "disabled"),
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// The operating mode of the radio.
///
/// The driver does not store this. It is derived from the CONFIG register's
/// PWR_UP and PRIM_RX bits together with the level last driven on the CE pin.
///
/// | PWR_UP | PRIM_RX | CE | mode |
/// |:------:|:-------:|:--:|:-----|
/// | 0 | - | - | [`ChipMode::PowerDown`] |
/// | 1 | - | 0 | [`ChipMode::Standby`] |
/// | 1 | 0 | 1 | [`ChipMode::TxSettling`] |
/// | 1 | 1 | 1 | [`ChipMode::Listening`] |
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChipMode {
    /// The oscillator is off. Registers keep their values.
    PowerDown,
    /// Powered up and idle (Standby-I).
    Standby,
    /// CE is pulsed in TX mode; a payload is being (or about to be) sent.
    TxSettling,
    /// Actively receiving.
    Listening,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for ChipMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ChipMode::PowerDown => defmt::write!(fmt, "Power Down"),
            ChipMode::Standby => defmt::write!(fmt, "Standby"),
            ChipMode::TxSettling => defmt::write!(fmt, "TX Settling"),
            ChipMode::Listening => defmt::write!(fmt, "Listening"),
        }
    }
}

impl Display for ChipMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ChipMode::PowerDown => write!(f, "Power Down"),
            ChipMode::Standby => write!(f, "Standby"),
            ChipMode::TxSettling => write!(f, "TX Settling"),
            ChipMode::Listening => write!(f, "Listening"),
        }
    }
}

/// A struct used to describe the STATUS byte.
///
/// The nRF24L01 clocks out its STATUS register as the first byte of every
/// SPI transaction, so a fresh copy of these flags is available after any
/// command the driver issues.
///
/// To instantiate an object with flags that have different values:
/// ```
/// use tinyrf24::StatusFlags;
/// let flags = StatusFlags::default() // all flags are false
///     .with_rx_dr(true); // assert only `rx_dr` flags
/// assert!(flags.rx_dr());
/// ```
/// Use [`StatusFlags::default`] to instantiate all flags set to false.
/// Use [`StatusFlags::new`] to instantiate all flags set to true.
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent.
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if TX Data Failed (maximum retransmits reached).
    #[bits(1, access = RO)]
    pub tx_df: bool,

    /// The pipe number of the payload at the top of the RX FIFO.
    ///
    /// A value of `7` means the RX FIFO is empty. `6` is unused.
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}

impl StatusFlags {
    /// A mask to isolate only the event flags of the STATUS register.
    pub(crate) const IRQ_MASK: u8 = 0x70;

    /// The value of [`StatusFlags::rx_pipe()`] when the RX FIFO is empty.
    pub const RX_PIPE_EMPTY: u8 = 7;

    /// A convenience constructor similar to [`StatusFlags::default`] except
    /// all event flags are set to `true`.
    pub fn new() -> Self {
        Self::from_bits(Self::IRQ_MASK)
    }

    /// A flag to describe if RX Data Ready to read.
    pub fn with_rx_dr(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::RX_DR_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::RX_DR_OFFSET))
    }

    /// A flag to describe if TX Data Sent.
    pub fn with_tx_ds(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DS_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DS_OFFSET))
    }

    /// A flag to describe if TX Data Failed.
    pub fn with_tx_df(self, flag: bool) -> Self {
        let new_val = self.into_bits() & !(1 << Self::TX_DF_OFFSET);
        Self::from_bits(new_val | ((flag as u8) << Self::TX_DF_OFFSET))
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, tx_df: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.tx_df()
        )
    }
}
