use super::{Nrf24Error, RF24};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use super::{bit_fields::SetupRetry, registers};
#[cfg(any(
    all(feature = "defmt", target_os = "none"),
    all(feature = "std", not(target_os = "none"))
))]
use crate::radio::prelude::{
    EsbChannel, EsbCrcLength, EsbDataRate, EsbPaLevel, EsbPayloadLength, EsbRadio, EsbStatus,
};

#[cfg(all(feature = "std", not(target_os = "none")))]
extern crate std;

impl<SPI, DO, DELAY> EsbDetails for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        self.update()?;
        let status = self._status;
        defmt::println!(
            "STATUS____________________{=u8:#04X} rx_dr={=bool} tx_ds={=bool} tx_df={=bool} pipe={=u8} tx_full={=bool}",
            status.into_bits(),
            status.rx_dr(),
            status.tx_ds(),
            status.tx_df(),
            status.rx_pipe(),
            status.tx_full()
        );

        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        defmt::println!("CRC Length________________{}", self.get_crc_length()?);
        defmt::println!(
            "Address width_____________{=u8} bytes",
            self._address_width
        );
        defmt::println!(
            "Payload size______________{=u8} bytes",
            self.get_payload_size()
        );

        let retry_setup = SetupRetry::from_bits(self.read_register(registers::SETUP_RETR)?);
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            retry_setup.delay_us()
        );
        defmt::println!("Auto retry attempts_______{=u8} maximum", retry_setup.arc());

        let en_aa = self.read_register(registers::EN_AA)?;
        defmt::println!("Auto Acknowledgment_______{=u8:#010b}", en_aa);
        defmt::println!("Chip mode_________________{}", self.get_mode()?);

        let width = self._address_width as usize;
        let mut address = [0u8; 5];
        self.read_register_buf(registers::TX_ADDR, &mut address[..width])?;
        // most significant byte first
        address[..width].reverse();
        defmt::println!("TX address________________{=[u8]:02X}", &address[..width]);

        let open_pipes = self.read_register(registers::EN_RXADDR)?;
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for pipe in 0..=5u8 {
            if pipe < 2 {
                self.read_register_buf(registers::RX_ADDR_P0 + pipe, &mut address[..width])?;
                address[..width].reverse();
            } else {
                address[width - 1] = self.read_register(registers::RX_ADDR_P0 + pipe)?;
            }
            let payload_size = self.read_register(registers::RX_PW_P0 + pipe)?;
            defmt::println!(
                "Pipe {=u8} ({=istr}) bound to {=[u8]:02X} expecting {=u8} bytes",
                pipe,
                if (open_pipes & (1u8 << pipe)) > 0 {
                    opened
                } else {
                    closed
                },
                &address[..width],
                payload_size,
            );
        }
        Ok(())
    }

    #[cfg(not(any(
        all(feature = "defmt", target_os = "none"),
        all(feature = "std", not(target_os = "none"))
    )))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(target_os = "none"))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        self.update()?;
        let status = self._status;
        std::println!(
            "STATUS____________________{:#04X} rx_dr={} tx_ds={} tx_df={} pipe={} tx_full={}",
            status.into_bits(),
            status.rx_dr(),
            status.tx_ds(),
            status.tx_df(),
            status.rx_pipe(),
            status.tx_full()
        );

        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("RF Power Amplifier________{}", self.get_pa_level()?);
        std::println!("CRC Length________________{}", self.get_crc_length()?);
        std::println!("Address width_____________{} bytes", self._address_width);
        std::println!("Payload size______________{} bytes", self.get_payload_size());

        let retry_setup = SetupRetry::from_bits(self.read_register(registers::SETUP_RETR)?);
        std::println!(
            "Auto retry delay__________{} microseconds",
            retry_setup.delay_us()
        );
        std::println!("Auto retry attempts_______{} maximum", retry_setup.arc());

        let en_aa = self.read_register(registers::EN_AA)?;
        std::println!("Auto Acknowledgment_______{:#010b}", en_aa);
        std::println!("Chip mode_________________{}", self.get_mode()?);

        let width = self._address_width as usize;
        let mut address = [0u8; 5];
        self.read_register_buf(registers::TX_ADDR, &mut address[..width])?;
        std::print!("TX address________________0x");
        for byte in address[..width].iter().rev() {
            std::print!("{byte:02X}");
        }
        std::println!();

        let open_pipes = self.read_register(registers::EN_RXADDR)?;
        for pipe in 0..=5u8 {
            if pipe < 2 {
                self.read_register_buf(registers::RX_ADDR_P0 + pipe, &mut address[..width])?;
            } else {
                address[0] = self.read_register(registers::RX_ADDR_P0 + pipe)?;
            }
            let payload_size = self.read_register(registers::RX_PW_P0 + pipe)?;
            std::print!(
                "Pipe {pipe} ({}) bound to 0x",
                if (open_pipes & (1u8 << pipe)) > 0 {
                    " open "
                } else {
                    "closed"
                }
            );
            for byte in address[..width].iter().rev() {
                std::print!("{byte:02X}");
            }
            std::println!(" expecting {payload_size} bytes");
        }
        Ok(())
    }

    fn dump_registers(&mut self, registers: &mut [u8; 0x18]) -> Result<(), Self::DetailsErrorType> {
        for (offset, value) in registers.iter_mut().enumerate() {
            *value = self.read_register(offset as u8)?;
        }
        Ok(())
    }
}
