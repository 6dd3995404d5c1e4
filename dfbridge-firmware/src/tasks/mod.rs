//! Embassy async tasks
//!
//! The serial channels are interrupt driven (see `irq`); the tasks here only
//! cover the buttons and the LED.

pub mod led;
pub mod tick;

pub use led::button_led_task;
pub use tick::button_tick_task;
