//! Bridge configuration
//!
//! Everything is fixed at build time; there is no persisted configuration.

use dfbridge_hal::UartConfig;
use dfbridge_protocol::FrameFormat;

use crate::buttons::BUTTON_POLL_HZ;
use crate::dispatch::Dispatcher;
use crate::pins::PinMap;

/// Operator console baud rate
pub const CONSOLE_BAUD: u32 = 115_200;

/// DFPlayer module baud rate
pub const PERIPHERAL_BAUD: u32 = 9_600;

/// Top-level bridge configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BridgeConfig {
    /// Operator console serial settings
    pub console: UartConfig,
    /// Module serial settings
    pub peripheral: UartConfig,
    /// Layout of frames sent to the module
    pub frame_format: FrameFormat,
    /// Button sampling rate in Hz
    pub button_poll_hz: u32,
    /// GPIO assignments
    pub pins: PinMap,
}

impl BridgeConfig {
    /// Default configuration, usable in `const` context
    pub const fn new() -> Self {
        Self {
            console: UartConfig::eight_n_one(CONSOLE_BAUD),
            peripheral: UartConfig::eight_n_one(PERIPHERAL_BAUD),
            frame_format: FrameFormat::Legacy,
            button_poll_hz: BUTTON_POLL_HZ,
            pins: PinMap::pico(),
        }
    }

    /// Use computed checksums on every frame
    pub const fn with_checksums(mut self) -> Self {
        self.frame_format = FrameFormat::Checksummed;
        self
    }

    /// Button tick period in milliseconds
    pub fn button_poll_period_ms(&self) -> u64 {
        1000 / self.button_poll_hz.max(1) as u64
    }

    /// Dispatcher for the configured frame format
    pub fn dispatcher(&self) -> Dispatcher {
        Dispatcher::new(self.frame_format)
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.console.baudrate, 115_200);
        assert_eq!(config.peripheral.baudrate, 9_600);
        assert_eq!(config.frame_format, FrameFormat::Legacy);
        assert_eq!(config.button_poll_period_ms(), 31);
        assert_eq!(config.pins, PinMap::pico());
    }

    #[test]
    fn test_with_checksums() {
        let config = BridgeConfig::new().with_checksums();
        assert_eq!(config.dispatcher().format(), FrameFormat::Checksummed);
    }

    #[test]
    fn test_zero_poll_rate_does_not_divide_by_zero() {
        let config = BridgeConfig {
            button_poll_hz: 0,
            ..BridgeConfig::new()
        };
        assert_eq!(config.button_poll_period_ms(), 1000);
    }
}
