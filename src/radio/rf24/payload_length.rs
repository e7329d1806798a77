use crate::radio::{prelude::EsbPayloadLength, Nrf24Error, RF24};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbPayloadLength for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PayloadLengthErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_payload_size(&mut self, size: u8) -> Result<(), Self::PayloadLengthErrorType> {
        self._payload_size = size.clamp(1, 32);
        Ok(())
    }

    fn get_payload_size(&self) -> u8 {
        self._payload_size
    }
}
