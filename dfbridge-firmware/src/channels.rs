//! State shared between the button tasks
//!
//! The serial bridge lives entirely in interrupt handlers and needs no
//! channels; only the button tick and the LED task talk to each other.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use dfbridge_core::ButtonState;

/// Latest button sample, written by the tick task
pub static BUTTON_STATE: ButtonState = ButtonState::new();

/// Raised after every button sample
pub static BUTTONS_SAMPLED: Signal<CriticalSectionRawMutex, ()> = Signal::new();
