//! A simulated nRF24L01 register file for unit tests.
//!
//! [`SimChip`] implements [`SpiDevice`], [`OutputPin`] (the CE pin), and [`DelayNs`]
//! over shared state, so one chip can hand out all three peripherals to [`RF24::new()`].
//! Every CE change, delay, and SPI command is appended to an event log.
extern crate std;

use core::{cell::RefCell, convert::Infallible};
use std::{collections::VecDeque, rc::Rc, vec::Vec};

use embedded_hal::{
    delay::DelayNs,
    digital::{self, OutputPin},
    spi::{self, Operation, SpiDevice},
};

use crate::radio::{commands, mnemonics, registers, rf24::bit_fields::SetupRetry, RF24};

/// Something the driver did to the simulated chip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// The CE pin was driven to the given level.
    Ce(bool),
    /// A blocking delay (in microseconds).
    DelayUs(u32),
    /// A register (offset) was read.
    Read(u8),
    /// A register (offset) was written with the given first data byte.
    Write(u8, u8),
    /// Any other SPI command.
    Command(u8),
}

const FIFO_DEPTH: usize = 3;

struct State {
    registers: [u8; 0x20],
    /// RX_ADDR_P0, RX_ADDR_P1, and TX_ADDR
    addresses: [[u8; 5]; 3],
    rx_fifo: VecDeque<(u8, Vec<u8>)>,
    tx_fifo: VecDeque<Vec<u8>>,
    sent: Vec<Vec<u8>>,
    ack_transmissions: bool,
    events: Vec<Event>,
}

impl State {
    fn power_on_reset() -> Self {
        let mut regs = [0u8; 0x20];
        regs[registers::CONFIG as usize] = 0x08;
        regs[registers::EN_AA as usize] = 0x3F;
        regs[registers::EN_RXADDR as usize] = 0x03;
        regs[registers::SETUP_AW as usize] = 0x03;
        regs[registers::SETUP_RETR as usize] = 0x03;
        regs[registers::RF_CH as usize] = 0x02;
        regs[registers::RF_SETUP as usize] = 0x0F;
        regs[registers::STATUS as usize] = 0x0E;
        regs[0x0C..0x10].copy_from_slice(&[0xC3, 0xC4, 0xC5, 0xC6]);
        Self {
            registers: regs,
            addresses: [[0xE7; 5], [0xC2; 5], [0xE7; 5]],
            rx_fifo: VecDeque::new(),
            tx_fifo: VecDeque::new(),
            sent: Vec::new(),
            ack_transmissions: true,
            events: Vec::new(),
        }
    }

    fn address_slot(register: u8) -> Option<usize> {
        match register {
            registers::RX_ADDR_P0 => Some(0),
            registers::RX_ADDR_P1 => Some(1),
            registers::TX_ADDR => Some(2),
            _ => None,
        }
    }

    fn status(&self) -> u8 {
        let rx_pipe = self.rx_fifo.front().map_or(7, |(pipe, _)| *pipe);
        let tx_full = (self.tx_fifo.len() == FIFO_DEPTH) as u8;
        self.registers[registers::STATUS as usize] & 0x70 | (rx_pipe << 1) | tx_full
    }

    fn fifo_status(&self) -> u8 {
        let mut value = 0;
        if self.rx_fifo.is_empty() {
            value |= mnemonics::RX_EMPTY;
        }
        if self.rx_fifo.len() == FIFO_DEPTH {
            value |= mnemonics::RX_FULL;
        }
        if self.tx_fifo.is_empty() {
            value |= mnemonics::TX_EMPTY;
        }
        if self.tx_fifo.len() == FIFO_DEPTH {
            value |= mnemonics::TX_FULL;
        }
        value
    }

    fn read(&self, register: u8, index: usize) -> u8 {
        if let Some(slot) = Self::address_slot(register) {
            return self.addresses[slot][index.min(4)];
        }
        match register {
            registers::STATUS => self.status(),
            registers::FIFO_STATUS => self.fifo_status(),
            _ => self.registers[register as usize],
        }
    }

    fn write(&mut self, register: u8, data: &[u8]) {
        if let Some(slot) = Self::address_slot(register) {
            let len = data.len().min(5);
            self.addresses[slot][..len].copy_from_slice(&data[..len]);
            return;
        }
        let Some(&value) = data.first() else {
            return;
        };
        match register {
            // write 1 to clear
            registers::STATUS => self.registers[register as usize] &= !(value & 0x70),
            registers::FIFO_STATUS | registers::OBSERVE_TX | registers::RPD => (),
            _ => self.registers[register as usize] = value,
        }
    }

    fn exchange(&mut self, buf: &mut [u8]) {
        let Some(&command) = buf.first() else {
            return;
        };
        buf[0] = self.status();
        let data = &mut buf[1..];
        match command {
            0x00..=0x1F => {
                let register = command & commands::REGISTER_MASK;
                self.events.push(Event::Read(register));
                for (index, byte) in data.iter_mut().enumerate() {
                    *byte = self.read(register, index);
                }
            }
            0x20..=0x3F => {
                let register = command & commands::REGISTER_MASK;
                self.events
                    .push(Event::Write(register, data.first().copied().unwrap_or(0)));
                self.write(register, data);
            }
            commands::R_RX_PAYLOAD => {
                self.events.push(Event::Command(command));
                let payload = self.rx_fifo.pop_front().map(|(_, p)| p).unwrap_or_default();
                for (index, byte) in data.iter_mut().enumerate() {
                    *byte = payload.get(index).copied().unwrap_or(0);
                }
            }
            commands::W_TX_PAYLOAD => {
                self.events.push(Event::Command(command));
                if self.tx_fifo.len() < FIFO_DEPTH {
                    self.tx_fifo.push_back(data.to_vec());
                }
            }
            commands::FLUSH_TX => {
                self.events.push(Event::Command(command));
                self.tx_fifo.clear();
            }
            commands::FLUSH_RX => {
                self.events.push(Event::Command(command));
                self.rx_fifo.clear();
            }
            _ => self.events.push(Event::Command(command)),
        }
    }

    /// A rising CE edge in PTX mode sends the top of the TX FIFO.
    fn pulse_tx(&mut self) {
        let config = self.registers[registers::CONFIG as usize];
        if config & mnemonics::PWR_UP == 0 || config & mnemonics::PRIM_RX != 0 {
            return;
        }
        let Some(payload) = self.tx_fifo.front().cloned() else {
            return;
        };
        let retries =
            SetupRetry::from_bits(self.registers[registers::SETUP_RETR as usize]).arc();
        if self.ack_transmissions {
            self.tx_fifo.pop_front();
            self.sent.push(payload);
            self.registers[registers::STATUS as usize] |= mnemonics::MASK_TX_DS;
            self.registers[registers::OBSERVE_TX as usize] &= !mnemonics::ARC_CNT;
        } else {
            // the payload stays in the TX FIFO
            self.registers[registers::STATUS as usize] |= mnemonics::MASK_MAX_RT;
            self.registers[registers::OBSERVE_TX as usize] =
                self.registers[registers::OBSERVE_TX as usize] & !mnemonics::ARC_CNT | retries;
        }
    }
}

/// A handle to the simulated chip. Clones share the same state.
#[derive(Clone)]
pub struct SimChip {
    state: Rc<RefCell<State>>,
}

pub type SimRadio = RF24<SimChip, SimChip, SimChip>;

impl Default for SimChip {
    /// A chip fresh out of its power on reset.
    fn default() -> Self {
        Self {
            state: Rc::new(RefCell::new(State::power_on_reset())),
        }
    }
}

impl SimChip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a driver bound to this chip.
    pub fn radio(&self) -> SimRadio {
        RF24::new(self.clone(), self.clone(), self.clone())
    }

    pub fn events(&self) -> Vec<Event> {
        self.state.borrow().events.clone()
    }

    pub fn clear_events(&self) {
        self.state.borrow_mut().events.clear();
    }

    /// The raw value of a single byte register (or the first byte of an address).
    pub fn register(&self, register: u8) -> u8 {
        self.state.borrow().read(register, 0)
    }

    pub fn address(&self, register: u8) -> [u8; 5] {
        let state = self.state.borrow();
        State::address_slot(register).map_or([0; 5], |slot| state.addresses[slot])
    }

    /// Should transmissions be acknowledged (`true`) or reach max retries (`false`)?
    pub fn ack_transmissions(&self, ack: bool) {
        self.state.borrow_mut().ack_transmissions = ack;
    }

    /// Payloads that were acknowledged by the simulated receiver.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.state.borrow().sent.clone()
    }

    /// Simulate a payload arriving on the given `pipe`.
    pub fn deliver(&self, pipe: u8, payload: &[u8]) {
        let mut state = self.state.borrow_mut();
        if state.rx_fifo.len() < FIFO_DEPTH {
            state.rx_fifo.push_back((pipe, payload.to_vec()));
            state.registers[registers::STATUS as usize] |= mnemonics::MASK_RX_DR;
        }
    }
}

impl spi::ErrorType for SimChip {
    type Error = Infallible;
}

impl SpiDevice for SimChip {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        for operation in operations {
            match operation {
                Operation::TransferInPlace(buf) => state.exchange(buf),
                Operation::Write(buf) => {
                    let mut copy = buf.to_vec();
                    state.exchange(&mut copy);
                }
                Operation::Read(buf) => buf.fill(0),
                Operation::Transfer(read, write) => {
                    let mut copy = write.to_vec();
                    state.exchange(&mut copy);
                    let len = read.len().min(copy.len());
                    read[..len].copy_from_slice(&copy[..len]);
                }
                Operation::DelayNs(_) => (),
            }
        }
        Ok(())
    }
}

impl digital::ErrorType for SimChip {
    type Error = Infallible;
}

impl OutputPin for SimChip {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.state.borrow_mut().events.push(Event::Ce(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        state.events.push(Event::Ce(true));
        state.pulse_tx();
        Ok(())
    }
}

impl DelayNs for SimChip {
    fn delay_ns(&mut self, ns: u32) {
        self.state.borrow_mut().events.push(Event::DelayUs(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.state.borrow_mut().events.push(Event::DelayUs(us));
    }
}

#[cfg(test)]
mod test {
    use super::{Event, SimChip};
    use crate::radio::{commands, prelude::EsbStatus, registers};

    #[test]
    fn status_write_one_to_clear() {
        let chip = SimChip::new();
        let mut radio = chip.radio();
        chip.deliver(2, &[1, 2, 3]);
        radio.update().unwrap();
        assert_eq!(radio.get_status_flags().rx_pipe(), 2);
        // writing 0 leaves the flag set
        radio.write_register(registers::STATUS, 0).unwrap();
        assert!(radio.read_register(registers::STATUS).unwrap() & 0x40 != 0);
        radio.write_register(registers::STATUS, 0x40).unwrap();
        assert_eq!(radio.read_register(registers::STATUS).unwrap() & 0x70, 0);
        assert_eq!(
            chip.events().last(),
            Some(&Event::Read(registers::STATUS))
        );
    }

    #[test]
    fn default_is_power_on_reset() {
        let chip = SimChip::default();
        assert_eq!(chip.register(registers::CONFIG), 0x08);
        assert_eq!(chip.address(registers::RX_ADDR_P1), [0xC2; 5]);
        assert!(chip.events().is_empty());
    }

    #[test]
    fn raw_payload_commands() {
        let chip = SimChip::new();
        let mut radio = chip.radio();
        chip.deliver(0, &[7, 8]);
        let mut buf = [0xFF; 2];
        radio.command(commands::R_RX_PAYLOAD, &mut buf).unwrap();
        assert_eq!(buf, [7, 8]);
        chip.clear_events();
        assert_eq!(radio.read_register(registers::FIFO_STATUS).unwrap(), 0x11);
        assert_eq!(chip.events(), [Event::Read(registers::FIFO_STATUS)]);
    }
}
