//! UART serial communication abstractions
//!
//! The bridge drains receive FIFOs from interrupt context, so reads are
//! non-blocking. Writes are the opposite: they busy-wait until the hardware
//! has accepted every byte, because a non-blocking put silently drops
//! characters once the transmit FIFO is full.

/// UART transmitter (byte sink)
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Write data to the UART
    ///
    /// Blocks until all data has been accepted by the hardware or an error
    /// occurs. Never drops bytes.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Block until every written byte has left the transmitter
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Write a string as raw ASCII bytes
    fn write_str_blocking(&mut self, text: &str) -> Result<(), Self::Error> {
        self.write_blocking(text.as_bytes())
    }
}

/// UART receiver
pub trait UartRx {
    /// Take the next byte from the receive FIFO if one is available
    ///
    /// Must return immediately with `None` when the FIFO is empty.
    fn try_read_byte(&mut self) -> Option<u8>;
}

/// UART interrupt status access
///
/// Interrupt handlers read the masked status and clear it before returning,
/// otherwise the interrupt re-fires immediately.
pub trait UartIrq {
    /// Read the masked interrupt status bits
    fn interrupt_status(&mut self) -> u32;

    /// Clear the given interrupt status bits
    fn clear_interrupts(&mut self, status: u32);
}

/// UART peripheral identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartId {
    Uart0,
    Uart1,
}

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl UartConfig {
    /// 8 data bits, no parity, one stop bit at the given baud rate
    pub const fn eight_n_one(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self::eight_n_one(115200)
    }
}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataBits {
    Seven,
    Eight,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopBits {
    One,
    Two,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_115200_8n1() {
        let config = UartConfig::default();
        assert_eq!(config.baudrate, 115200);
        assert_eq!(config.data_bits, DataBits::Eight);
        assert_eq!(config.parity, Parity::None);
        assert_eq!(config.stop_bits, StopBits::One);
    }

    #[test]
    fn test_eight_n_one() {
        assert_eq!(UartConfig::eight_n_one(9600).baudrate, 9600);
    }
}
