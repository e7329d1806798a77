use crate::radio::rf24::bit_fields::SetupRetry;
use crate::{CrcLength, DataRate, PaLevel};

/// A struct to contain configuration about pipe addresses.
///
/// Addresses are stored least significant byte first.
/// Until pipe 0 is given its own address, it follows the TX address.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PipeConfig {
    tx_address: [u8; 5],
    pipe0: Option<[u8; 5]>,
    pipe1: [u8; 5],
    /// The distinguishing byte of pipes 2 - 5.
    pipe_n: [u8; 4],
    rx_pipes_enabled: u8,
}

impl Default for PipeConfig {
    /// Mirrors the nRF24L01 power-on reset values.
    fn default() -> Self {
        Self {
            tx_address: [0xE7; 5],
            pipe0: None,
            pipe1: [0xC2; 5],
            pipe_n: [0xC3, 0xC4, 0xC5, 0xC6],
            rx_pipes_enabled: 3,
        }
    }
}

impl PipeConfig {
    fn set_tx_address(&mut self, address: &[u8]) {
        let len = address.len().min(5);
        self.tx_address[..len].copy_from_slice(&address[..len]);
    }

    fn set_rx_address(&mut self, pipe: u8, address: &[u8]) {
        let len = address.len().min(5);
        if len == 0 || pipe > 5 {
            return;
        }
        self.rx_pipes_enabled |= 1 << pipe;
        match pipe {
            0 => {
                let mut pipe0 = self.pipe0.unwrap_or(self.tx_address);
                pipe0[..len].copy_from_slice(&address[..len]);
                self.pipe0 = Some(pipe0);
            }
            1 => self.pipe1[..len].copy_from_slice(&address[..len]),
            _ => self.pipe_n[pipe as usize - 2] = address[0],
        }
    }

    fn close_rx_pipe(&mut self, pipe: u8) {
        if pipe < 6 {
            self.rx_pipes_enabled &= !(1 << pipe);
        }
    }

    /// Writes the full address of `pipe` into `address`.
    ///
    /// For pipes 2 - 5 the upper bytes come from pipe 1.
    fn get_rx_address(&self, pipe: u8, address: &mut [u8]) {
        let len = address.len().min(5);
        if len == 0 {
            return;
        }
        match pipe {
            0 => {
                let pipe0 = self.pipe0.unwrap_or(self.tx_address);
                address[..len].copy_from_slice(&pipe0[..len]);
            }
            1 => address[..len].copy_from_slice(&self.pipe1[..len]),
            2..=5 => {
                address[..len].copy_from_slice(&self.pipe1[..len]);
                address[0] = self.pipe_n[pipe as usize - 2];
            }
            _ => (),
        }
    }
}

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use tinyrf24::{radio::RadioConfig, PaLevel};
///
/// let config = RadioConfig::default()
///     .with_channel(42)
///     .with_pa_level(PaLevel::Low)
///     .with_payload_size(4);
/// assert_eq!(config.channel(), 42);
/// ```
/// Apply it with
/// [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config).
#[derive(Debug, Clone, Copy)]
pub struct RadioConfig {
    channel: u8,
    pa_level: PaLevel,
    data_rate: DataRate,
    crc_length: CrcLength,
    payload_size: u8,
    address_width: u8,
    auto_ack: u8,
    auto_retries: SetupRetry,
    pipes: PipeConfig,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::address_width()`] | `5` |
    /// | [`RadioConfig::pa_level()`] | [`PaLevel::Max`] |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit8`] |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Mbps1`] |
    /// | [`RadioConfig::payload_size()`] | `32` |
    /// | [`RadioConfig::auto_ack()`] | `0x3F` (enabled for pipes 0 - 5) |
    /// | [`RadioConfig::auto_retry_delay()`] | `3` (1000 microseconds) |
    /// | [`RadioConfig::auto_retry_count()`] | `15` |
    /// | [`RadioConfig::tx_address()`] | `[0xE7; 5]` |
    ///
    /// ## Default RX pipes' configuration
    ///
    /// | pipe number | state  | address     |
    /// |-------------|--------|-------------|
    /// |      0[^2]  | open   | `[0xE7; 5]` |
    /// |      1      | open   | `[0xC2; 5]` |
    /// |      2[^1]  | closed | `0xC3`      |
    /// |      3[^1]  | closed | `0xC4`      |
    /// |      4[^1]  | closed | `0xC5`      |
    /// |      5[^1]  | closed | `0xC6`      |
    ///
    /// [^1]: Remember, pipes 2 - 5 share the same upper bytes as the address on pipe 1.
    ///
    /// [^2]: Pipe 0 follows [`RadioConfig::tx_address()`] (so auto-ack replies are
    ///     received) unless it is given its own address with [`RadioConfig::with_rx_address()`].
    fn default() -> Self {
        Self {
            channel: 76,
            pa_level: PaLevel::Max,
            data_rate: DataRate::Mbps1,
            crc_length: CrcLength::Bit8,
            payload_size: 32,
            address_width: 5,
            auto_ack: 0x3F,
            auto_retries: SetupRetry::new().with_ard(3).with_arc(15),
            pipes: PipeConfig::default(),
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.crc_length
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    ///
    /// See [`EsbCrcLength::set_crc_length()`](fn@crate::radio::prelude::EsbCrcLength::set_crc_length).
    pub fn with_crc_length(self, crc_length: CrcLength) -> Self {
        Self { crc_length, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air).
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_pa_level()`].
    pub const fn pa_level(&self) -> PaLevel {
        self.pa_level
    }

    /// The Power Amplitude (PA) level.
    ///
    /// See [`EsbPaLevel::set_pa_level()`](fn@crate::radio::prelude::EsbPaLevel::set_pa_level).
    pub fn with_pa_level(self, pa_level: PaLevel) -> Self {
        Self { pa_level, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_address_width()`].
    pub const fn address_width(&self) -> u8 {
        self.address_width
    }

    /// The address width.
    ///
    /// This value is clamped to range [3, 5].
    pub fn with_address_width(self, value: u8) -> Self {
        Self {
            address_width: value.clamp(3, 5),
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// Set the channel (over the air frequency).
    ///
    /// This value is clamped to range [0, 127].
    /// The radio's frequency can be determined by the following equation:
    /// ```text
    /// frequency (in MHz) = channel + 2400
    /// ```
    pub fn with_channel(self, value: u8) -> Self {
        Self {
            channel: value.min(127),
            ..self
        }
    }

    /// The auto-retry feature's `delay` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_delay(&self) -> u8 {
        self.auto_retries.ard()
    }

    /// The auto-retry feature's `count` (set via [`RadioConfig::with_auto_retries()`])
    pub const fn auto_retry_count(&self) -> u8 {
        self.auto_retries.arc()
    }

    /// Set the auto-retry feature's `delay` and `count` parameters.
    ///
    /// See [`EsbAutoAck::set_auto_retries()`](fn@crate::radio::prelude::EsbAutoAck::set_auto_retries).
    pub fn with_auto_retries(self, delay: u8, count: u8) -> Self {
        let auto_retries = self
            .auto_retries
            .with_ard(delay.min(15))
            .with_arc(count.min(15));
        Self {
            auto_retries,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_auto_ack()`].
    pub const fn auto_ack(&self) -> u8 {
        self.auto_ack
    }

    /// Enable or disable auto-ACK feature.
    ///
    /// The given value (in binary form) is used to control the auto-ack feature for each pipe.
    /// Bit 0 controls the feature for pipe 0. Bit 1 controls the feature for pipe 1. And so on.
    /// Bits 6 and 7 are ignored.
    pub fn with_auto_ack(self, enable: u8) -> Self {
        Self {
            auto_ack: enable & 0x3F,
            ..self
        }
    }

    /// Return the value set by [`RadioConfig::with_payload_size()`].
    pub const fn payload_size(&self) -> u8 {
        self.payload_size
    }

    /// The payload size for statically sized payloads.
    ///
    /// This value is clamped to range [1, 32].
    pub fn with_payload_size(self, value: u8) -> Self {
        Self {
            payload_size: value.clamp(1, 32),
            ..self
        }
    }

    /// Close a RX pipe from receiving data.
    pub fn close_rx_pipe(self, pipe: u8) -> Self {
        let mut pipes = self.pipes;
        pipes.close_rx_pipe(pipe);
        Self { pipes, ..self }
    }

    /// Is a specified RX pipe open (`true`) or closed (`false`)?
    pub fn is_rx_pipe_enabled(&self, pipe: u8) -> bool {
        pipe < 6 && self.pipes.rx_pipes_enabled & (1u8 << pipe) > 0
    }

    /// Get the address for a specified `pipe` set by [`RadioConfig::with_rx_address()`]
    ///
    /// Pipe 0 reports the TX address if it was never given its own.
    pub fn rx_address(&self, pipe: u8, address: &mut [u8]) {
        self.pipes.get_rx_address(pipe, address);
    }

    /// Set the address of a specified RX `pipe` and mark it open.
    ///
    /// This does nothing if the given `pipe` is greater than `5`.
    /// For pipes 2 - 5, only the first byte of `address` is used.
    pub fn with_rx_address(self, pipe: u8, address: &[u8]) -> Self {
        let mut pipes = self.pipes;
        pipes.set_rx_address(pipe, address);
        Self { pipes, ..self }
    }

    /// Get the address set by [`RadioConfig::with_tx_address()`]
    pub fn tx_address(&self, address: &mut [u8]) {
        let len = address.len().min(5);
        address[..len].copy_from_slice(&self.pipes.tx_address[..len]);
    }

    /// Set the TX address.
    ///
    /// Pipe 0 is bound to this address unless
    /// [`RadioConfig::with_rx_address()`] assigns it another one.
    pub fn with_tx_address(self, address: &[u8]) -> Self {
        let mut pipes = self.pipes;
        pipes.set_tx_address(address);
        Self { pipes, ..self }
    }

    pub(crate) fn auto_retries_bits(&self) -> u8 {
        self.auto_retries.into_bits()
    }
}
