//! Board-agnostic core logic for the dfbridge firmware
//!
//! This crate contains everything that does not touch registers:
//!
//! - Hex encoding of received bytes
//! - Console command dispatch to protocol frames
//! - Receive burst transcoding
//! - Interrupt service routines written against `dfbridge-hal` traits
//! - Button sampling and LED control
//! - Bridge configuration and board pin map

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod bridge;
pub mod buttons;
pub mod config;
pub mod dispatch;
pub mod hex;
pub mod pins;
pub mod transcoder;

#[cfg(test)]
mod mock;

pub use bridge::{service_console, service_peripheral, write_banner, BridgeError, BurstReport};
pub use buttons::{ButtonLed, ButtonState, LedAction};
pub use config::BridgeConfig;
pub use dispatch::{Dispatch, Dispatcher};
pub use hex::{encode_hex_ascii, encode_hex_byte};
pub use pins::{gpio_to_uart, PinMap, SerialPin};
pub use transcoder::RxBurst;
