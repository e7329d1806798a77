use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

use crate::radio::{prelude::EsbPipe, Nrf24Error, RF24};

use super::registers;

/// Convert an integer address into the byte order the radio expects
/// (least significant byte first).
///
/// ```
/// use tinyrf24::radio::address_from_u64;
/// assert_eq!(address_from_u64(0x1122334455), [0x55, 0x44, 0x33, 0x22, 0x11]);
/// ```
///
/// Bytes beyond the fifth are discarded.
pub fn address_from_u64(address: u64) -> [u8; 5] {
    let bytes = address.to_le_bytes();
    [bytes[0], bytes[1], bytes[2], bytes[3], bytes[4]]
}

/// Pipes 2 - 5 only store the first byte of an address.
fn distinguishing_byte(address: &[u8]) -> Option<u8> {
    address.first().copied()
}

impl<SPI, DO, DELAY> EsbPipe for RF24<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn open_reading_pipe(&mut self, pipe: u8, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        if pipe < 2 {
            // only write the bytes that were passed
            let width = address.len().min(self._address_width as usize);
            if width == 0 {
                return Ok(());
            }
            self.write_register_buf(registers::RX_ADDR_P0 + pipe, &address[..width])?;
        } else {
            let Some(byte) = distinguishing_byte(address) else {
                return Ok(());
            };
            self.write_register(registers::RX_ADDR_P0 + pipe, byte)?;
        }

        let out = self.read_register(registers::EN_RXADDR)? | (1 << pipe);
        self.write_register(registers::EN_RXADDR, out)?;
        self.write_register(registers::RX_PW_P0 + pipe, self._payload_size)?;
        Ok(())
    }

    /// If `address` is empty, then this function does nothing.
    fn open_writing_pipe(&mut self, address: &[u8]) -> Result<(), Self::PipeErrorType> {
        let width = address.len().min(self._address_width as usize);
        if width == 0 {
            return Ok(());
        }
        self.write_register_buf(registers::TX_ADDR, &address[..width])?;
        self.open_reading_pipe(0, address)
    }

    fn close_reading_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > 5 {
            return Ok(());
        }
        let out = self.read_register(registers::EN_RXADDR)? & !(1 << pipe);
        self.write_register(registers::EN_RXADDR, out)?;
        Ok(())
    }

    fn set_address_width(&mut self, width: u8) -> Result<(), Self::PipeErrorType> {
        let width = width.clamp(3, 5);
        self.write_register(registers::SETUP_AW, width - 2)?;
        self._address_width = width;
        Ok(())
    }

    /// Returns [`Nrf24Error::BinaryCorruption`] if the SETUP_AW register
    /// holds the reserved value `0`.
    fn get_address_width(&mut self) -> Result<u8, Self::PipeErrorType> {
        let setup_aw = self.read_register(registers::SETUP_AW)? & 3;
        if setup_aw == 0 {
            return Err(Nrf24Error::BinaryCorruption);
        }
        self._address_width = setup_aw + 2;
        Ok(self._address_width)
    }
}
