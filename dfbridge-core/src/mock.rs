//! Simulated UART for host tests
//!
//! Injecting bytes raises the receive interrupt status the way the hardware
//! would; tests then "fire" the interrupt by calling the service routine.

use std::collections::VecDeque;

use dfbridge_hal::{UartIrq, UartRx, UartTx};

/// Receive interrupt bit
pub const RX_IRQ: u32 = 1 << 4;
/// Receive timeout interrupt bit
pub const RT_IRQ: u32 = 1 << 6;

#[derive(Debug, Default)]
pub struct MockUart {
    rx: VecDeque<u8>,
    pub tx: Vec<u8>,
    pub status: u32,
    pub cleared: u32,
    pub reads: usize,
    pub flushes: usize,
    /// Fail the write that would take `tx` past this many bytes
    pub fail_after: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteFailed;

impl MockUart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes arrive on the wire
    pub fn inject(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
        if !bytes.is_empty() {
            self.status |= RX_IRQ | RT_IRQ;
        }
    }

    /// Interrupt line level
    pub fn pending(&self) -> bool {
        self.status != 0
    }

    pub fn tx_text(&self) -> &str {
        std::str::from_utf8(&self.tx).unwrap()
    }

    pub fn rx_len(&self) -> usize {
        self.rx.len()
    }
}

impl UartTx for MockUart {
    type Error = WriteFailed;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if let Some(limit) = self.fail_after {
            if self.tx.len() + data.len() > limit {
                return Err(WriteFailed);
            }
        }
        self.tx.extend_from_slice(data);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

impl UartRx for MockUart {
    fn try_read_byte(&mut self) -> Option<u8> {
        self.reads += 1;
        self.rx.pop_front()
    }
}

impl UartIrq for MockUart {
    fn interrupt_status(&mut self) -> u32 {
        self.status
    }

    fn clear_interrupts(&mut self, status: u32) {
        self.cleared |= status;
        self.status &= !status;
    }
}
