//! Receive burst transcoding
//!
//! Bytes from the module carry no framing the bridge relies on, so each byte
//! is echoed on its own as `HH ` after a one-time header per burst.

use dfbridge_hal::UartTx;

use crate::hex::encode_hex_ascii;

/// Written to the console before the first byte of a burst
pub const RX_HEADER: &str = "\r\nRX: ";

/// Written after every hex pair
pub const SEPARATOR: u8 = b' ';

/// Per-invocation transcoder state
///
/// Create one at the start of each interrupt invocation and drop it at the
/// end. The header flag never carries over between invocations.
#[derive(Debug, Default)]
pub struct RxBurst {
    header_written: bool,
    bytes: usize,
}

impl RxBurst {
    /// Start a new burst
    pub const fn new() -> Self {
        Self {
            header_written: false,
            bytes: 0,
        }
    }

    /// Whether the header has been emitted in this burst
    pub fn header_written(&self) -> bool {
        self.header_written
    }

    /// Bytes transcoded so far in this burst
    pub fn len(&self) -> usize {
        self.bytes
    }

    /// Whether no bytes have been transcoded in this burst
    pub fn is_empty(&self) -> bool {
        self.bytes == 0
    }

    /// Transcode one received byte to the console
    pub fn push<T: UartTx>(&mut self, byte: u8, console: &mut T) -> Result<(), T::Error> {
        if !self.header_written {
            console.write_str_blocking(RX_HEADER)?;
            self.header_written = true;
        }

        let [hi, lo] = encode_hex_ascii(byte);
        console.write_blocking(&[hi, lo, SEPARATOR])?;
        self.bytes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockUart;

    #[test]
    fn test_header_once_per_burst() {
        let mut console = MockUart::new();
        let mut burst = RxBurst::new();

        for byte in [0x00, 0x1A, 0xFF] {
            burst.push(byte, &mut console).unwrap();
        }

        assert_eq!(console.tx_text(), "\r\nRX: 00 1A FF ");
        assert_eq!(burst.len(), 3);
    }

    #[test]
    fn test_empty_burst_writes_nothing() {
        let console = MockUart::new();
        let burst = RxBurst::new();

        assert!(!burst.header_written());
        assert!(burst.is_empty());
        assert!(console.tx.is_empty());
    }

    #[test]
    fn test_new_burst_repeats_header() {
        let mut console = MockUart::new();

        RxBurst::new().push(0x7E, &mut console).unwrap();
        RxBurst::new().push(0xEF, &mut console).unwrap();

        assert_eq!(console.tx_text(), "\r\nRX: 7E \r\nRX: EF ");
    }

    #[test]
    fn test_header_write_failure() {
        let mut console = MockUart::new();
        console.fail_after = Some(0);
        let mut burst = RxBurst::new();

        assert!(burst.push(0x01, &mut console).is_err());
        assert!(!burst.header_written());
    }
}
