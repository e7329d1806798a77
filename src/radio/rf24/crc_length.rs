use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::{bit_fields::Config, registers};
use crate::radio::{prelude::EsbCrcLength, Nrf24Error, RF24};
use crate::CrcLength;

impl<SPI, DO, DELAY> EsbCrcLength for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type CrcLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The CRCO bit is ignored while EN_CRC is clear, so that combination
    /// reads back as [`CrcLength::Disabled`].
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        Ok(config.crc_length())
    }

    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(
            registers::CONFIG,
            config.with_crc_length(crc_length).into_bits(),
        )?;
        Ok(())
    }
}
