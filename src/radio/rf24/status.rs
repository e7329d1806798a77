use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, RF24},
    types::StatusFlags,
};

use super::{commands, registers};

impl<SPI, DO, DELAY> EsbStatus for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The STATUS register's event flags are cleared by writing `1` to them.
    /// Only the flags set in `flags` are written, so other events stay pending.
    fn clear_status_flags(&mut self, flags: StatusFlags) -> Result<(), Self::StatusErrorType> {
        self.write_register(registers::STATUS, flags.into_bits() & StatusFlags::IRQ_MASK)?;
        Ok(())
    }

    fn update(&mut self) -> Result<(), Self::StatusErrorType> {
        self.spi_read(0, commands::NOP)
    }

    fn get_status_flags(&self) -> StatusFlags {
        self._status
    }
}
