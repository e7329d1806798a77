/// A module encapsulating register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RPD: u8 = 0x09;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
}

/// A module encapsulating SPI commands for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    /// Register offsets occupy the lower 5 bits of R_REGISTER and W_REGISTER.
    pub const REGISTER_MASK: u8 = 0x1F;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
    pub const NOP: u8 = 0xFF;
}

/// A module to encapsulate bit mnemonics
pub mod mnemonics {
    // STATUS
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    // CONFIG
    pub const EN_CRC: u8 = 1 << 3;
    pub const CRCO: u8 = 1 << 2;
    pub const PWR_UP: u8 = 1 << 1;
    pub const PRIM_RX: u8 = 1;

    // FIFO_STATUS
    pub const RX_EMPTY: u8 = 1;
    pub const RX_FULL: u8 = 1 << 1;
    pub const TX_EMPTY: u8 = 1 << 4;
    pub const TX_FULL: u8 = 1 << 5;

    // OBSERVE_TX
    /// Retransmissions of the last payload; reset when a new payload is sent.
    pub const ARC_CNT: u8 = 0x0F;

    /// All six pipes of EN_AA or EN_RXADDR.
    pub const ALL_PIPES: u8 = 0x3F;
}

/// Minimum wait times (in microseconds) from the nRF24L01 datasheet.
pub mod timing {
    /// Power on reset. Technically 4.5 ms + 14 us worst case.
    pub const POWER_ON_RESET: u32 = 5000;
    /// Crystal oscillator start up (Tpd2stby) after asserting PWR_UP.
    pub const POWER_UP: u32 = 1500;
    /// Standby to active RX (Tstby2a).
    pub const RX_SETTLE: u32 = 130;
    /// Time allowed for a reception in flight to finish after CE goes low.
    pub const RX_DRAIN: u32 = 250;
    /// Minimum CE high pulse that starts a transmission (Thce).
    pub const TX_PULSE: u32 = 10;
    /// Interval between STATUS polls while waiting for a transmission result.
    pub const TX_POLL: u32 = 200;
}
