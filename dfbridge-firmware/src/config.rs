//! Board configuration
//!
//! The serial pins are bound to concrete peripherals in `main`; the pin map
//! in [`BRIDGE_CONFIG`] is checked against the RP2040 UART pin mux at startup
//! so a mismatch shows up in the log.

use defmt::*;
use dfbridge_core::BridgeConfig;

/// Bridge settings: 115200 console, 9600 module, legacy frames, 32 Hz
/// buttons, Pico pin map
pub const BRIDGE_CONFIG: BridgeConfig = BridgeConfig::new();

/// Log the pin map and flag serial pins that are not on the expected UART
pub fn check_pin_map() {
    let pins = BRIDGE_CONFIG.pins;

    for (pin, gpio) in pins.misrouted() {
        warn!("{:?} on gpio{} is not routed to {:?}", pin, gpio, pin.uart());
    }

    info!(
        "Pins: console gpio{}/{}, module gpio{}/{}, buttons gpio{}/{}, led gpio{}",
        pins.console_tx,
        pins.console_rx,
        pins.module_tx,
        pins.module_rx,
        pins.left_button,
        pins.right_button,
        pins.led
    );
}
