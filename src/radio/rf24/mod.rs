use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod auto_ack;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod fifo;
mod init;
mod pa_level;
mod payload_length;
mod pipe;
mod power;
mod radio;
mod status;
pub use constants::{commands, mnemonics, registers, timing};
pub use pipe::address_from_u64;

use crate::StatusFlags;

/// An collection of error types to describe hardware malfunctions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// Represents a register value that the nRF24L01 reserves
    /// (as it was transferred over the SPI bus' MISO).
    BinaryCorruption,
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// The register access layer (the functions that only encode register reads,
/// register writes and raw commands) is also exposed for advanced usage.
/// Every SPI transaction caches the STATUS byte that the radio clocks out first;
/// see [`EsbStatus::get_status_flags()`](fn@crate::radio::prelude::EsbStatus::get_status_flags).
///
/// Each instance exclusively owns its SPI device, CE pin, and delay provider.
/// Multiple radios (on distinct CSN pins) are simply multiple instances.
pub struct RF24<SPI, DO, DELAY> {
    _spi: SPI,
    _ce_pin: DO,
    /// The level last driven on the CE pin.
    _ce_high: bool,
    _delay_impl: DELAY,
    _buf: [u8; 33],
    _status: StatusFlags,
    _payload_size: u8,
    _address_width: u8,
}

impl<SPI, DO, DELAY> RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate an [`RF24`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter). The [`SpiDevice`] asserts CSN
    /// for the duration of each transaction and releases it (idle high) afterward.
    ///
    /// No SPI transactions are made here; call
    /// [`initialize()`](fn@crate::radio::prelude::EsbInit::initialize) next.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> RF24<SPI, DO, DELAY> {
        RF24 {
            _spi: spi,
            _ce_pin: ce_pin,
            _ce_high: false,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
            _status: StatusFlags::from_bits(0),
            _payload_size: 32,
            _address_width: 5,
        }
    }

    /// Release the SPI device, CE pin, and delay provider.
    pub fn free(self) -> (SPI, DO, DELAY) {
        (self._spi, self._ce_pin, self._delay_impl)
    }

    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)?;
        self._status = StatusFlags::from_bits(self._buf[0]);
        Ok(())
    }

    /// Clocks out `command` followed by `len` NOP bytes.
    ///
    /// This is also used to write SPI commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::NOP)?;
    /// // STATUS register is now stored in self._status
    /// ```
    fn spi_read(&mut self, len: usize, command: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = len.min(32);
        self._buf[0] = command;
        self._buf[1..=len].fill(commands::NOP);
        self.spi_transfer(len + 1)
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(32);
        self._buf[0] = command;
        self._buf[1..=len].copy_from_slice(&buf[..len]);
        self.spi_transfer(len + 1)
    }

    fn set_ce(&mut self, high: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if high {
            self._ce_pin.set_high().map_err(Nrf24Error::Gpo)?;
        } else {
            self._ce_pin.set_low().map_err(Nrf24Error::Gpo)?;
        }
        self._ce_high = high;
        Ok(())
    }

    /// Read a single byte from the register at offset `register`.
    ///
    /// Only the lower 5 bits of `register` are used.
    pub fn read_register(&mut self, register: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::R_REGISTER | (register & commands::REGISTER_MASK))?;
        Ok(self._buf[1])
    }

    /// Read a multi-byte register (like a pipe address) into `buf`.
    ///
    /// At most 32 bytes are read. Only the lower 5 bits of `register` are used.
    pub fn read_register_buf(
        &mut self,
        register: u8,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(32);
        self.spi_read(len, commands::R_REGISTER | (register & commands::REGISTER_MASK))?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(self._status)
    }

    /// Write a single byte to the register at offset `register`.
    ///
    /// Returns the STATUS byte clocked out while the command was sent,
    /// which reflects the radio's state before this write took effect.
    pub fn write_register(
        &mut self,
        register: u8,
        value: u8,
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_REGISTER | (register & commands::REGISTER_MASK);
        self._buf[1] = value;
        self.spi_transfer(2)?;
        Ok(self._status)
    }

    /// Write a multi-byte register (like a pipe address).
    ///
    /// At most 32 bytes are written. Only the lower 5 bits of `register` are used.
    pub fn write_register_buf(
        &mut self,
        register: u8,
        buf: &[u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_write_buf(
            commands::W_REGISTER | (register & commands::REGISTER_MASK),
            buf,
        )?;
        Ok(self._status)
    }

    /// Send a raw `opcode` followed by the bytes in `buf`.
    ///
    /// This is a full-duplex exchange: the bytes received are written back into
    /// `buf` (at most 32 bytes). Pass an empty slice for single byte commands.
    pub fn command(
        &mut self,
        opcode: u8,
        buf: &mut [u8],
    ) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len().min(32);
        self.spi_write_buf(opcode, &buf[..len])?;
        buf[..len].copy_from_slice(&self._buf[1..=len]);
        Ok(self._status)
    }

    /// Received Power Detector.
    ///
    /// Returns `true` if a signal above -64 dBm was present on the current
    /// channel during the last reception.
    pub fn rpd(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.read_register(registers::RPD)? & 1 == 1)
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers};
    use crate::{spi_test_expects, test::mk_radio};
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn test_rpd() {
        let spi_expectations = spi_test_expects![
            // get the RPD register value
            (vec![registers::RPD, 0xFFu8], vec![0xEu8, 0xFFu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.rpd().unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn register_offsets_are_masked() {
        let spi_expectations = spi_test_expects![
            // 0xE5 & 0x1F == RF_CH
            (vec![registers::RF_CH, 0xFFu8], vec![0xEu8, 2u8]),
            (
                vec![registers::RF_CH | commands::W_REGISTER, 40u8],
                vec![0x4Eu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.read_register(0xE5).unwrap(), 2);
        let status = radio.write_register(0xE5, 40).unwrap();
        // the status clocked out during the write
        assert!(status.rx_dr());
        assert_eq!(status.rx_pipe(), 7);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn multi_byte_registers() {
        let mut address = vec![0x55u8; 6];
        address[0] = registers::TX_ADDR | commands::W_REGISTER;
        let spi_expectations = spi_test_expects![
            (address, vec![0xEu8, 0, 0, 0, 0, 0]),
            (
                vec![registers::TX_ADDR, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
                vec![0xEu8, 1, 2, 3, 4, 5],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.write_register_buf(registers::TX_ADDR, &[0x55; 5]).unwrap();
        let mut result = [0u8; 5];
        radio
            .read_register_buf(registers::TX_ADDR, &mut result)
            .unwrap();
        assert_eq!(result, [1, 2, 3, 4, 5]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn raw_command() {
        let spi_expectations = spi_test_expects![
            (vec![commands::FLUSH_TX], vec![0x2Eu8]),
            (vec![commands::R_RX_PAYLOAD, 0xAA, 0xBB], vec![0xEu8, 1, 2]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.command(commands::FLUSH_TX, &mut []).unwrap().tx_ds());
        let mut buf = [0xAAu8, 0xBB];
        radio.command(commands::R_RX_PAYLOAD, &mut buf).unwrap();
        assert_eq!(buf, [1, 2]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn free() {
        let mocks = mk_radio(&[], &[]);
        let (radio, _spi, _ce_pin) = (mocks.0, mocks.1, mocks.2);
        let (mut spi, mut ce_pin, _delay) = radio.free();
        spi.done();
        ce_pin.done();
    }
}
