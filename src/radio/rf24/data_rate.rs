use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use super::registers;
use crate::radio::{prelude::EsbDataRate, Nrf24Error, RF24};
use crate::DataRate;

impl<SPI, DO, DELAY> EsbDataRate for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Returns [`Nrf24Error::BinaryCorruption`] if both RF_DR_LOW and RF_DR_HIGH are set
    /// (a reserved encoding).
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let da_bin = self.read_register(registers::RF_SETUP)? & DataRate::MASK;
        if da_bin == DataRate::MASK {
            return Err(Nrf24Error::BinaryCorruption);
        }
        Ok(DataRate::from_bits(da_bin))
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let rf_setup = self.read_register(registers::RF_SETUP)?;
        let out = rf_setup & !DataRate::MASK | data_rate.into_bits();
        self.write_register(registers::RF_SETUP, out)?;
        Ok(())
    }
}
