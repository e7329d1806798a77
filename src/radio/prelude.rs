//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use tinyrf24::radio::prelude::*;
//! ```

use crate::types::{ChipMode, CrcLength, DataRate, FifoState, PaLevel, StatusFlags};

use super::RadioConfig;

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
///
/// <div class="warning">
///
/// The radio must not be listening while pipes are (re)configured.
/// Call [`EsbRadio::stop_listening()`] first.
///
/// </div>
pub trait EsbPipe {
    type PipeErrorType;

    /// Open a specified `pipe` for receiving data when radio is listening.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    ///
    /// The pipe's static payload width is set to the current
    /// [`EsbPayloadLength::get_payload_size()`]. Changing the payload size afterward
    /// does not update pipes that are already open; open them again.
    ///
    /// ### About pipe addresses
    /// Addresses are given least significant byte first.
    /// Pipes 0 and 1 will store a full address (up to [`EsbPipe::set_address_width()`]
    /// bytes). Pipes 2-5 only store the first (least significant) byte of `address`,
    /// borrowing the remaining bytes from pipe 1.
    /// ```ignore
    /// radio.open_reading_pipe(1, &address_from_u64(0xC2C2C2C2C2))?;
    /// radio.open_reading_pipe(2, &[0xC3])?; // listens on 0xC2C2C2C2C3
    /// ```
    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Set the address used for transmitting.
    ///
    /// Pipe 0 is opened with the same `address` so that automatic
    /// acknowledgements from the receiver are recognized. This overwrites
    /// any address previously given to pipe 0.
    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType>;

    /// Close a specified pipe from receiving data.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;

    /// Set the address width (applies to all pipes).
    ///
    /// The specified width is clamped to the range [3, 5].
    fn set_address_width(&mut self, width: u8) -> Result<(), Self::PipeErrorType>;

    /// Get the currently configured address width (applied to all pipes).
    fn get_address_width(&mut self) -> Result<u8, Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Get the [`StatusFlags`] state that was cached from the latest SPI transaction.
    fn get_status_flags(&self) -> StatusFlags;

    /// Clear the radio's status flags.
    ///
    /// Set any member of [`StatusFlags`] to `true` to clear the corresponding
    /// event. Members set to `false` are left untouched.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType>;

    /// Refresh the internal cache of status byte
    /// (which is also saved from every SPI transaction).
    fn update(&mut self) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Is there a payload waiting in the RX FIFO?
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;

    /// Same as [`EsbFifo::available()`], but also saves the pipe number
    /// that received the payload at the top of the RX FIFO.
    ///
    /// `pipe` is only written when this function returns `true`.
    fn available_pipe(&mut self, pipe: &mut u8) -> Result<bool, Self::FifoErrorType>;

    /// Discard all payloads in the RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Discard all payloads in the TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the TX FIFO (`about_tx` is `true`) or the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;
}

/// A trait to represent manipulation of payload lengths (static)
/// for an ESB capable transceiver.
pub trait EsbPayloadLength {
    type PayloadLengthErrorType;

    /// Set the payload size used when pipes are opened and when receiving.
    ///
    /// The given `size` is clamped to the range [1, 32]. No registers are
    /// written until a pipe is opened.
    fn set_payload_size(&mut self, size: u8) -> Result<(), Self::PayloadLengthErrorType>;

    /// Get the currently configured payload size.
    fn get_payload_size(&self) -> u8;
}

/// A trait to represent manipulation of the automatic acknowledgement
/// and retransmission features for an ESB capable transceiver.
pub trait EsbAutoAck {
    type AutoAckErrorType;

    /// Enable or disable the auto-ack feature for all pipes.
    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType>;

    /// Enable or disable the auto-ack feature for a specified `pipe`.
    ///
    /// If the specified `pipe` is not in range [0, 5], then this function does nothing.
    fn set_auto_ack_pipe(&mut self, pipe: u8, enable: bool)
        -> Result<(), Self::AutoAckErrorType>;

    /// Set the number of retries and the delay between them.
    ///
    /// - `delay` is clamped to [0, 15]; the delay is `(delay + 1) * 250` microseconds.
    /// - `count` is clamped to [0, 15]; 0 disables retransmission.
    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType>;
}

/// A trait to represent manipulation of the power amplitude level
/// for an ESB capable transceiver.
pub trait EsbPaLevel {
    type PaLevelErrorType;

    /// Get the currently configured Power Amplitude Level (PA Level)
    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType>;

    /// Set the radio's Power Amplitude Level (PA Level)
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType>;
}

/// A trait to represent manipulation of the state of power
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power down the radio. Register values are retained.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio and wait for the crystal oscillator to settle.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an ESB capable transceiver.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Get the current setting of the radio's CRC Length.
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC Length.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;
}

/// A trait to represent manipulation of the data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Get the currently configured Data Rate.
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's Data Rate.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to represent the mode transitions and payload transfers
/// of an ESB capable transceiver.
pub trait EsbRadio {
    type RadioErrorType;

    /// Put the radio into active RX mode.
    ///
    /// The RX FIFO is flushed first. This blocks for 130 microseconds so that
    /// the radio is receiving when this function returns.
    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Leave active RX mode.
    ///
    /// This blocks for 250 microseconds so that any reception in progress
    /// can finish before the radio is switched to TX mode.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Is the radio configured as a receiver (PRIM_RX)?
    fn is_listening(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Get the radio's current [`ChipMode`].
    fn get_mode(&mut self) -> Result<ChipMode, Self::RadioErrorType>;

    /// Blocking transmission of a single payload (up to 32 bytes).
    ///
    /// Returns `true` if the payload was sent (and acknowledged when auto-ack
    /// is enabled), or `false` if the maximum number of retransmits was reached.
    ///
    /// <div class="warning">
    ///
    /// There is no timeout. The retry count and delay set by
    /// [`EsbAutoAck::set_auto_retries()`] bound how long this blocks.
    ///
    /// </div>
    fn transmit(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType>;

    /// Read the payload at the top of the RX FIFO into `buf`.
    ///
    /// The number of bytes read is the smallest of `buf.len()`, 32, and `len`
    /// (or [`EsbPayloadLength::get_payload_size()`] if `len` is `None`).
    /// Only one payload is consumed; call [`EsbFifo::available()`] again
    /// to drain the rest of the RX FIFO.
    fn receive(&mut self, buf: &mut [u8], len: Option<u8>) -> Result<u8, Self::RadioErrorType>;

    /// Get the Auto-Retry Count (ARC) about the previous transmission.
    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType>;
}

/// A trait to represent the initial configuration of an ESB capable transceiver.
pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio's hardware.
    ///
    /// - waits 5 milliseconds for the radio's power on reset
    /// - clears stale status flags
    /// - sets 15 retries with a 1000 microsecond delay
    /// - powers up with an 8 bit CRC and waits 1.5 milliseconds
    ///
    /// The radio is left in standby as a transmitter.
    fn initialize(&mut self) -> Result<(), Self::ConfigErrorType>;

    /// Reconfigure the radio using the given `config` object.
    ///
    /// See [`RadioConfig`] for an example. Pipes enabled in `config` are opened
    /// *after* the payload size is applied.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to represent debug output for an ESB capable transceiver.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about radio's current configuration.
    ///
    /// This should only be used for debugging development.
    /// Using this in production should be limited due to a significant increase in
    /// compile size.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;

    /// Read the registers `0x00` through `0x17` into `registers`.
    fn dump_registers(&mut self, registers: &mut [u8; 0x18])
        -> Result<(), Self::DetailsErrorType>;
}
