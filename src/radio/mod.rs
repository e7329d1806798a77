//! A module to encapsulate all things related to radio operation.
pub mod prelude;

pub(crate) mod rf24;
pub use rf24::{address_from_u64, commands, mnemonics, registers, timing, Nrf24Error, RF24};

mod config;
pub use config::RadioConfig;
