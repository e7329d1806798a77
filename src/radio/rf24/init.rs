use super::{mnemonics, registers, timing, Nrf24Error, RF24};
use crate::{
    radio::{
        prelude::{
            EsbChannel, EsbCrcLength, EsbDataRate, EsbInit, EsbPaLevel, EsbPayloadLength, EsbPipe,
            EsbStatus,
        },
        RadioConfig,
    },
    StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbInit for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`RF24::new()`].
    fn initialize(&mut self) -> Result<(), Self::ConfigErrorType> {
        self.set_ce(false)?;
        // Configuration bits do not stick until the power on reset has elapsed.
        // Technically we require 4.5ms + 14us as a worst case.
        self._delay_impl.delay_us(timing::POWER_ON_RESET);

        self.clear_status_flags(StatusFlags::new())?;
        // 15 retries, 1000 us apart
        self.write_register(registers::SETUP_RETR, 0x3F)?;
        // 8 bit CRC, powered up, PTX
        self.write_register(registers::CONFIG, mnemonics::EN_CRC | mnemonics::PWR_UP)?;
        self._delay_impl.delay_us(timing::POWER_UP);

        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!("radio initialized: {}", self._status);
        Ok(())
    }

    /// The radio should not be listening when this is called.
    ///
    /// Pipes are opened after the payload size and address width are applied,
    /// so each open pipe gets the configured static payload size. The TX address
    /// is applied before the RX pipes, so the configured pipe 0 address (and
    /// whether pipe 0 is open) is what remains.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        self.set_address_width(config.address_width())?;
        self.set_payload_size(config.payload_size())?;
        self.set_channel(config.channel())?;
        self.set_pa_level(config.pa_level())?;
        self.set_data_rate(config.data_rate())?;
        self.set_crc_length(config.crc_length())?;
        self.write_register(registers::EN_AA, config.auto_ack())?;
        self.write_register(registers::SETUP_RETR, config.auto_retries_bits())?;

        let mut address = [0; 5];
        config.tx_address(&mut address);
        self.open_writing_pipe(&address)?;
        for pipe in 0..6 {
            config.rx_address(pipe, &mut address);
            self.open_reading_pipe(pipe, &address)?;
            // pipe 1's address is reused by pipes 2-5, so it is written even when closed
            if !config.is_rx_pipe_enabled(pipe) {
                self.close_reading_pipe(pipe)?;
            }
        }

        #[cfg(feature = "defmt")]
        #[cfg(target_os = "none")]
        defmt::debug!(
            "radio configured: channel {=u8}, {} payloads of {=u8} bytes",
            config.channel(),
            config.data_rate(),
            config.payload_size()
        );
        Ok(())
    }
}
