//! RP2040-specific HAL for the dfbridge firmware
//!
//! This crate provides RP2040 implementations of the shared `dfbridge-hal`
//! traits:
//!
//! - Register-level UART access for interrupt handlers (non-blocking receive,
//!   busy-wait transmit, interrupt status)
//! - Conversion of bridge UART settings to embassy configuration
//! - LED output and active-low push buttons

#![no_std]

pub mod gpio;
pub mod uart;

// Re-export shared traits from dfbridge-hal for convenience
pub use dfbridge_hal::{ButtonPad, OutputPin, UartIrq, UartRx, UartTx};
