#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`RF24::new()`](fn@crate::radio::RF24::new)
//! - [`RF24::initialize()`](radio/struct.RF24.html#method.initialize)
//! - [`RF24::start_listening()`](radio/struct.RF24.html#method.start_listening)
//! - [`RF24::stop_listening()`](radio/struct.RF24.html#method.stop_listening)
//! - [`RF24::open_writing_pipe()`](radio/struct.RF24.html#method.open_writing_pipe)
//! - [`RF24::open_reading_pipe()`](radio/struct.RF24.html#method.open_reading_pipe)
//! - [`RF24::close_reading_pipe()`](radio/struct.RF24.html#method.close_reading_pipe)
//! - [`RF24::available()`](radio/struct.RF24.html#method.available)
//! - [`RF24::available_pipe()`](radio/struct.RF24.html#method.available_pipe)
//! - [`RF24::receive()`](radio/struct.RF24.html#method.receive)
//! - [`RF24::transmit()`](radio/struct.RF24.html#method.transmit)
//! - [`RF24::set_channel()`](radio/struct.RF24.html#method.set_channel)
//! - [`RF24::get_channel()`](radio/struct.RF24.html#method.get_channel)
//!
//! ## Advanced API
//!
//! - [`RF24::get_mode()`](radio/struct.RF24.html#method.get_mode)
//! - [`RF24::is_listening()`](radio/struct.RF24.html#method.is_listening)
//! - [`RF24::get_fifo_state()`](radio/struct.RF24.html#method.get_fifo_state)
//! - [`RF24::clear_status_flags()`](radio/struct.RF24.html#method.clear_status_flags)
//! - [`RF24::update()`](radio/struct.RF24.html#method.update)
//! - [`RF24::get_status_flags()`](radio/struct.RF24.html#method.get_status_flags)
//! - [`RF24::flush_rx()`](radio/struct.RF24.html#method.flush_rx)
//! - [`RF24::flush_tx()`](radio/struct.RF24.html#method.flush_tx)
//! - [`RF24::rpd()`](fn@crate::radio::RF24::rpd)
//! - [`RF24::get_last_arc()`](radio/struct.RF24.html#method.get_last_arc)
//! - [`RF24::print_details()`](radio/struct.RF24.html#method.print_details)
//! - [`RF24::dump_registers()`](radio/struct.RF24.html#method.dump_registers)
//! - [`RF24::free()`](fn@crate::radio::RF24::free)
//!
//! ## Register access
//!
//! - [`RF24::read_register()`](fn@crate::radio::RF24::read_register)
//! - [`RF24::read_register_buf()`](fn@crate::radio::RF24::read_register_buf)
//! - [`RF24::write_register()`](fn@crate::radio::RF24::write_register)
//! - [`RF24::write_register_buf()`](fn@crate::radio::RF24::write_register_buf)
//! - [`RF24::command()`](fn@crate::radio::RF24::command)
//!
//! ## Configuration API
//!
//! - [`RF24::with_config()`](radio/struct.RF24.html#method.with_config)
//! - [`RF24::set_auto_ack()`](radio/struct.RF24.html#method.set_auto_ack)
//! - [`RF24::set_auto_ack_pipe()`](radio/struct.RF24.html#method.set_auto_ack_pipe)
//! - [`RF24::set_auto_retries()`](radio/struct.RF24.html#method.set_auto_retries)
//! - [`RF24::set_address_width()`](radio/struct.RF24.html#method.set_address_width)
//! - [`RF24::get_address_width()`](radio/struct.RF24.html#method.get_address_width)
//! - [`RF24::set_payload_size()`](radio/struct.RF24.html#method.set_payload_size)
//! - [`RF24::get_payload_size()`](radio/struct.RF24.html#method.get_payload_size)
//! - [`RF24::set_data_rate()`](radio/struct.RF24.html#method.set_data_rate)
//! - [`RF24::get_data_rate()`](radio/struct.RF24.html#method.get_data_rate)
//! - [`RF24::set_pa_level()`](radio/struct.RF24.html#method.set_pa_level)
//! - [`RF24::get_pa_level()`](radio/struct.RF24.html#method.get_pa_level)
//! - [`RF24::set_crc_length()`](radio/struct.RF24.html#method.set_crc_length)
//! - [`RF24::get_crc_length()`](radio/struct.RF24.html#method.get_crc_length)
//! - [`RF24::is_powered()`](radio/struct.RF24.html#method.is_powered)
//! - [`RF24::power_up()`](radio/struct.RF24.html#method.power_up)
//! - [`RF24::power_down()`](radio/struct.RF24.html#method.power_down)
//!
#![no_std]

mod types;
pub use types::{ChipMode, CrcLength, DataRate, FifoState, PaLevel, StatusFlags};
pub mod radio;

#[cfg(test)]
mod sim_chip;
