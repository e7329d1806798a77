use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPaLevel, Nrf24Error, RF24};
use crate::PaLevel;

use super::registers;

impl<SPI, DO, DELAY> EsbPaLevel for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PaLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_pa_level(&mut self) -> Result<PaLevel, Self::PaLevelErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        Ok(PaLevel::from_bits(rf_setup))
    }

    /// Only the RF_PWR bits are changed. The data rate and LNA bits are preserved.
    fn set_pa_level(&mut self, pa_level: PaLevel) -> Result<(), Self::PaLevelErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        let out = rf_setup & !PaLevel::MASK | pa_level.into_bits();
        self.write_register(registers::RF_SETUP, out)?;
        Ok(())
    }
}
