use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPower, Nrf24Error, RF24};

use super::{bit_fields::Config, registers, timing};

impl<SPI, DO, DELAY> EsbPower for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// In full power down mode (a sleep state), a non-PA/LNA radio will consume
    /// approximately 900nA (.0009mA).
    ///
    /// The CE pin is left as is.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_power(false).into_bits())?;
        Ok(())
    }

    /// Blocks for 1.5 milliseconds (Tpd2stby) before returning,
    /// even if the radio was already powered.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        self.write_register(registers::CONFIG, config.with_power(true).into_bits())?;
        self._delay_impl.delay_us(timing::POWER_UP);
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        let config = Config::from_bits(self.read_register(registers::CONFIG)?);
        Ok(config.power())
    }
}
