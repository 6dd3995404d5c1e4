//! dfbridge Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the bridge logic is
//! written against. Chip-specific crates implement them, which keeps the
//! protocol core testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dfbridge-core / dfbridge-firmware      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dfbridge-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ dfbridge-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`] - Blocking byte sink
//! - [`uart::UartRx`] - Non-blocking receive FIFO access
//! - [`uart::UartIrq`] - Interrupt status query/clear
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`buttons::ButtonPad`] - Sampled push-button state

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use buttons::{ButtonMask, ButtonPad};
pub use gpio::{InputPin, OutputPin};
pub use uart::{UartConfig, UartId, UartIrq, UartRx, UartTx};
