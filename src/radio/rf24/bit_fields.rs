use bitfield_struct::bitfield;

use crate::{ChipMode, CrcLength};

/// The CONFIG register.
#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _padding: u8,

    /// Mask the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Mask the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Mask the "max retransmits" event from the IRQ pin.
    pub mask_max_rt: bool,

    #[bits(2, access = None)]
    crc: u8,

    pub power: bool,

    pub is_rx: bool,
}

impl Config {
    pub const fn crc_length(&self) -> CrcLength {
        CrcLength::from_bits(self.into_bits())
    }

    pub fn with_crc_length(self, length: CrcLength) -> Self {
        Self::from_bits(self.into_bits() & !CrcLength::MASK | length.into_bits())
    }

    /// Project the chip's operating mode from this register and the CE level.
    pub const fn mode(&self, ce_high: bool) -> ChipMode {
        if !self.power() {
            ChipMode::PowerDown
        } else if !ce_high {
            ChipMode::Standby
        } else if self.is_rx() {
            ChipMode::Listening
        } else {
            ChipMode::TxSettling
        }
    }
}

/// The SETUP_RETR register.
#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// The auto-retry delay: `(ard + 1) * 250` microseconds.
    #[bits(4)]
    pub ard: u8,

    /// The auto-retry count.
    #[bits(4)]
    pub arc: u8,
}

impl SetupRetry {
    pub fn delay_us(&self) -> u16 {
        (self.ard() as u16 + 1) * 250
    }
}
