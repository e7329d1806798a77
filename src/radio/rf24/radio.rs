use super::{bit_fields::Config, commands, mnemonics, registers, timing, Nrf24Error, RF24};
use crate::{
    radio::prelude::{EsbFifo, EsbRadio},
    ChipMode,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbRadio for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn start_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.flush_rx()?;
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_is_rx(true).into_bits())?;
        self.set_ce(true)?;
        self._delay_impl.delay_us(timing::RX_SETTLE);
        Ok(())
    }

    /// The CE pin is deasserted before PRIM_RX is cleared.
    fn stop_listening(&mut self) -> Result<(), Self::RadioErrorType> {
        self.set_ce(false)?;
        self._delay_impl.delay_us(timing::RX_DRAIN);
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_is_rx(false).into_bits())?;
        Ok(())
    }

    fn is_listening(&mut self) -> Result<bool, Self::RadioErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        Ok(config.is_rx())
    }

    fn get_mode(&mut self) -> Result<ChipMode, Self::RadioErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        Ok(config.mode(self._ce_high))
    }

    /// See [`EsbRadio::transmit()`] for implementation-agnostic detail.
    ///
    /// The TX FIFO is flushed first, so only the given `buf` is sent.
    /// Payloads longer than 32 bytes are truncated. Shorter payloads are not padded,
    /// so the receiving pipe's payload size should match `buf.len()`.
    ///
    /// The CE pin is pulsed for 10 microseconds, then the STATUS byte is polled
    /// every 200 microseconds until the radio reports a result.
    fn transmit(&mut self, buf: &[u8]) -> Result<bool, Self::RadioErrorType> {
        self.flush_tx()?;
        self.spi_write_buf(commands::W_TX_PAYLOAD, buf)?;
        self.set_ce(true)?;
        self._delay_impl.delay_us(timing::TX_PULSE);
        self.set_ce(false)?;

        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::trace!("TX payload of {=usize} bytes uploaded", buf.len().min(32));

        let events = mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT;
        loop {
            self._delay_impl.delay_us(timing::TX_POLL);
            self.spi_read(0, commands::NOP)?;
            if self._status.into_bits() & events != 0 {
                break;
            }
        }
        let status = self.write_register(registers::STATUS, events)?;

        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!("TX result: {}", status);

        Ok(status.tx_ds())
    }

    /// See [`EsbRadio::receive()`] for implementation-agnostic detail.
    ///
    /// NOP (`0xFF`) bytes are clocked out while the payload is read.
    /// The RX_DR flag is cleared afterward, even if more payloads remain.
    fn receive(&mut self, buf: &mut [u8], len: Option<u8>) -> Result<u8, Self::RadioErrorType> {
        let buf_len = (buf.len().min(32) as u8).min(len.unwrap_or(self._payload_size));
        if buf_len == 0 {
            return Ok(0);
        }
        self.spi_read(buf_len as usize, commands::R_RX_PAYLOAD)?;
        let end = buf_len as usize;
        buf[..end].copy_from_slice(&self._buf[1..=end]);
        self.write_register(registers::STATUS, mnemonics::MASK_RX_DR)?;
        Ok(buf_len)
    }

    fn get_last_arc(&mut self) -> Result<u8, Self::RadioErrorType> {
        Ok(self.read_register(registers::OBSERVE_TX)? & mnemonics::ARC_CNT)
    }
}
