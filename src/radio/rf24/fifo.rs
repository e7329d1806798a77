use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbFifo, Nrf24Error, RF24};
use crate::FifoState;

use super::{commands, mnemonics, registers};

impl<SPI, DO, DELAY> EsbFifo for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The RX_DR flag of a fresh STATUS byte is checked first.
    /// FIFO_STATUS is only read when that flag is clear, which catches
    /// payloads that remain after RX_DR was already cleared.
    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        self.spi_read(0, commands::NOP)?;
        if self._status.rx_dr() {
            return Ok(true);
        }
        let fifo = self.read_register(registers::FIFO_STATUS)?;
        Ok(fifo & mnemonics::RX_EMPTY == 0)
    }

    fn available_pipe(&mut self, pipe: &mut u8) -> Result<bool, Self::FifoErrorType> {
        if self.available()? {
            // the status cached by available() describes the top of the RX FIFO
            *pipe = self._status.rx_pipe();
            return Ok(true);
        }
        Ok(false)
    }

    /// Use this to discard all 3 layers in the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_RX)
    }

    /// Use this to discard all 3 layers in the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.spi_read(0, commands::FLUSH_TX)
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let fifo = self.read_register(registers::FIFO_STATUS)?;
        let (empty, full) = if about_tx {
            (mnemonics::TX_EMPTY, mnemonics::TX_FULL)
        } else {
            (mnemonics::RX_EMPTY, mnemonics::RX_FULL)
        };
        if fifo & empty != 0 {
            Ok(FifoState::Empty)
        } else if fifo & full != 0 {
            Ok(FifoState::Full)
        } else {
            Ok(FifoState::Occupied)
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, mnemonics, registers, EsbFifo, FifoState};
    use crate::{
        radio::prelude::EsbRadio,
        sim_chip::{Event, SimChip},
        spi_test_expects,
        test::mk_radio,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn available() {
        let spi_expectations = spi_test_expects![
            // RX_DR is asserted; FIFO_STATUS is not needed
            (vec![commands::NOP], vec![0x42u8]),
            // RX_DR is clear, but the RX FIFO is occupied
            (vec![commands::NOP], vec![0x0Eu8]),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x10u8]),
            // RX_DR is clear and the RX FIFO is empty
            (vec![commands::NOP], vec![0x0Eu8]),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x11u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert!(radio.available().unwrap());
        assert!(radio.available().unwrap());
        assert!(!radio.available().unwrap());
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn available_pipe() {
        let spi_expectations = spi_test_expects![
            // nothing received
            (vec![commands::NOP], vec![0x0Eu8]),
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, 0x11u8]),
            // a payload from pipe 2
            (vec![commands::NOP], vec![0x44u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut pipe = 9;
        assert!(!radio.available_pipe(&mut pipe).unwrap());
        assert_eq!(pipe, 9);
        assert!(radio.available_pipe(&mut pipe).unwrap());
        assert_eq!(pipe, 2);
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn flush_fifos() {
        let spi_expectations = spi_test_expects![
            (vec![commands::FLUSH_RX], vec![0xEu8]),
            (vec![commands::FLUSH_TX], vec![0xEu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.flush_rx().unwrap();
        radio.flush_tx().unwrap();
        spi.done();
        ce_pin.done();
    }

    fn get_fifo_state(about_tx: bool, fifo: u8, expected: FifoState) {
        let spi_expectations = spi_test_expects![
            (vec![registers::FIFO_STATUS, 0xFFu8], vec![0xEu8, fifo]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_fifo_state(about_tx).unwrap(), expected);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn fifo_states() {
        get_fifo_state(true, 0x10, FifoState::Empty);
        get_fifo_state(true, 0x20, FifoState::Full);
        get_fifo_state(true, 0x01, FifoState::Occupied);
        get_fifo_state(false, 0x01, FifoState::Empty);
        get_fifo_state(false, 0x02, FifoState::Full);
        get_fifo_state(false, 0x10, FifoState::Occupied);
    }

    #[test]
    fn available_after_rx_dr_cleared() {
        let chip = SimChip::new();
        let mut radio = chip.radio();
        chip.deliver(0, &[1; 32]);
        chip.deliver(1, &[2; 32]);
        let mut payload = [0u8; 32];
        radio.receive(&mut payload, None).unwrap();
        assert_eq!(payload, [1; 32]);
        // RX_DR is now clear, but a second payload is waiting
        chip.clear_events();
        let mut pipe = 0;
        assert!(radio.available_pipe(&mut pipe).unwrap());
        assert_eq!(pipe, 1);
        assert_eq!(
            chip.events(),
            [
                Event::Command(commands::NOP),
                Event::Read(registers::FIFO_STATUS)
            ]
        );
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Occupied);
        assert_eq!(radio.get_fifo_state(true).unwrap(), FifoState::Empty);
    }

    #[test]
    fn fifo_state_tracks_occupancy() {
        let chip = SimChip::new();
        let mut radio = chip.radio();
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Empty);
        for pipe in 0..3 {
            chip.deliver(pipe, &[pipe]);
        }
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Full);
        assert_eq!(
            chip.register(registers::FIFO_STATUS),
            mnemonics::RX_FULL | mnemonics::TX_EMPTY
        );
        radio.flush_rx().unwrap();
        assert_eq!(radio.get_fifo_state(false).unwrap(), FifoState::Empty);
        assert_eq!(radio.get_fifo_state(true).unwrap(), FifoState::Empty);
    }
}
