//! Board pin map
//!
//! The serial pins only work when the chip's pin mux routes them to the UART
//! the bridge drives. [`PinMap::misrouted`] reports the ones that are not.

use dfbridge_hal::UartId;

/// Determine which UART can use a given GPIO pin
///
/// RP2040 has specific pin mappings for each UART.
pub fn gpio_to_uart(gpio: u8) -> Option<UartId> {
    // UART0: GPIO 0/1, 12/13, 16/17, 28/29
    // UART1: GPIO 4/5, 8/9, 20/21, 24/25
    match gpio {
        0 | 1 | 12 | 13 | 16 | 17 | 28 | 29 => Some(UartId::Uart0),
        4 | 5 | 8 | 9 | 20 | 21 | 24 | 25 => Some(UartId::Uart1),
        _ => None,
    }
}

/// One of the four serial lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialPin {
    ConsoleTx,
    ConsoleRx,
    ModuleTx,
    ModuleRx,
}

impl SerialPin {
    /// UART the line belongs to: console on UART0, module on UART1
    pub const fn uart(self) -> UartId {
        match self {
            SerialPin::ConsoleTx | SerialPin::ConsoleRx => UartId::Uart0,
            SerialPin::ModuleTx | SerialPin::ModuleRx => UartId::Uart1,
        }
    }
}

/// GPIO numbers used by the bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinMap {
    pub console_tx: u8,
    pub console_rx: u8,
    pub module_tx: u8,
    pub module_rx: u8,
    pub left_button: u8,
    pub right_button: u8,
    pub led: u8,
}

impl PinMap {
    /// Raspberry Pi Pico wiring
    pub const fn pico() -> Self {
        Self {
            console_tx: 0,
            console_rx: 1,
            module_tx: 4,
            module_rx: 5,
            left_button: 14,
            right_button: 15,
            led: 25,
        }
    }

    /// Serial lines with their GPIO numbers
    pub fn serial(&self) -> [(SerialPin, u8); 4] {
        [
            (SerialPin::ConsoleTx, self.console_tx),
            (SerialPin::ConsoleRx, self.console_rx),
            (SerialPin::ModuleTx, self.module_tx),
            (SerialPin::ModuleRx, self.module_rx),
        ]
    }

    /// Serial lines whose GPIO is not routed to their UART
    pub fn misrouted(&self) -> impl Iterator<Item = (SerialPin, u8)> {
        self.serial()
            .into_iter()
            .filter(|&(pin, gpio)| gpio_to_uart(gpio) != Some(pin.uart()))
    }
}

impl Default for PinMap {
    fn default() -> Self {
        Self::pico()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpio_to_uart() {
        assert_eq!(gpio_to_uart(0), Some(UartId::Uart0));
        assert_eq!(gpio_to_uart(1), Some(UartId::Uart0));
        assert_eq!(gpio_to_uart(4), Some(UartId::Uart1));
        assert_eq!(gpio_to_uart(5), Some(UartId::Uart1));
        assert_eq!(gpio_to_uart(2), None);
    }

    #[test]
    fn test_pico_map_is_routed() {
        assert_eq!(PinMap::pico().misrouted().count(), 0);
    }

    #[test]
    fn test_misrouted_serial_pins() {
        let map = PinMap {
            console_tx: 4,
            module_rx: 2,
            ..PinMap::pico()
        };

        let bad: Vec<_> = map.misrouted().collect();
        assert_eq!(bad, [(SerialPin::ConsoleTx, 4), (SerialPin::ModuleRx, 2)]);
    }
}
