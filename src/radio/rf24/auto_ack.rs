use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbAutoAck, Nrf24Error, RF24};

use super::{bit_fields::SetupRetry, mnemonics, registers};

impl<SPI, DO, DELAY> EsbAutoAck for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type AutoAckErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_auto_ack(&mut self, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        self.write_register(registers::EN_AA, mnemonics::ALL_PIPES * enable as u8)?;
        Ok(())
    }

    fn set_auto_ack_pipe(&mut self, pipe: u8, enable: bool) -> Result<(), Self::AutoAckErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let mask = 1 << pipe;
        let reg_val = self.read_register(registers::EN_AA)?;
        self.write_register(registers::EN_AA, reg_val & !mask | (mask * enable as u8))?;
        Ok(())
    }

    fn set_auto_retries(&mut self, delay: u8, count: u8) -> Result<(), Self::AutoAckErrorType> {
        let setup_retr = SetupRetry::new()
            .with_ard(delay.min(15))
            .with_arc(count.min(15));
        self.write_register(registers::SETUP_RETR, setup_retr.into_bits())?;
        Ok(())
    }
}
