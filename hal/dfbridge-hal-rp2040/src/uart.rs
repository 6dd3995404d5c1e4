//! UART access for interrupt context
//!
//! Embassy configures the peripherals (clocks, pins, baud rate); the interrupt
//! handlers then talk to the PL011 registers directly through [`RawUart`],
//! which is a zero-sized handle and can be created inside each handler.

use core::convert::Infallible;

use dfbridge_hal::uart::{DataBits, Parity, StopBits, UartConfig, UartId};
use dfbridge_hal::{UartIrq, UartRx, UartTx};
use embassy_rp::pac;

/// Convert a bridge UART configuration into an embassy one
pub fn embassy_config(config: &UartConfig) -> embassy_rp::uart::Config {
    let mut cfg = embassy_rp::uart::Config::default();
    cfg.baudrate = config.baudrate;
    cfg.data_bits = match config.data_bits {
        DataBits::Seven => embassy_rp::uart::DataBits::DataBits7,
        DataBits::Eight => embassy_rp::uart::DataBits::DataBits8,
    };
    cfg.parity = match config.parity {
        Parity::None => embassy_rp::uart::Parity::ParityNone,
        Parity::Even => embassy_rp::uart::Parity::ParityEven,
        Parity::Odd => embassy_rp::uart::Parity::ParityOdd,
    };
    cfg.stop_bits = match config.stop_bits {
        StopBits::One => embassy_rp::uart::StopBits::STOP1,
        StopBits::Two => embassy_rp::uart::StopBits::STOP2,
    };
    cfg
}

/// Register-level handle to one UART
#[derive(Debug, Clone, Copy)]
pub struct RawUart {
    id: UartId,
}

impl RawUart {
    /// Handle for UART0
    pub const fn uart0() -> Self {
        Self { id: UartId::Uart0 }
    }

    /// Handle for UART1
    pub const fn uart1() -> Self {
        Self { id: UartId::Uart1 }
    }

    fn regs(&self) -> pac::uart::Uart {
        match self.id {
            UartId::Uart0 => pac::UART0,
            UartId::Uart1 => pac::UART1,
        }
    }

    /// Unmask the receive and receive-timeout interrupts
    ///
    /// The timeout interrupt catches bytes that sit in the FIFO below the
    /// receive trigger level.
    pub fn enable_rx_interrupts(&mut self) {
        self.regs().uartimsc().modify(|w| {
            w.set_rxim(true);
            w.set_rtim(true);
        });
    }
}

impl UartTx for RawUart {
    type Error = Infallible;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        let regs = self.regs();
        for &byte in data {
            // Busy-wait while the TX FIFO is full
            while regs.uartfr().read().txff() {}
            regs.uartdr().write(|w| w.set_data(byte));
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        let regs = self.regs();
        while regs.uartfr().read().busy() {}
        Ok(())
    }
}

impl UartRx for RawUart {
    fn try_read_byte(&mut self) -> Option<u8> {
        let regs = self.regs();
        if regs.uartfr().read().rxfe() {
            return None;
        }
        // Error flags in the upper bits are ignored; the byte is still echoed
        Some(regs.uartdr().read().data())
    }
}

impl UartIrq for RawUart {
    fn interrupt_status(&mut self) -> u32 {
        self.regs().uartmis().read().0
    }

    fn clear_interrupts(&mut self, status: u32) {
        self.regs()
            .uarticr()
            .write_value(pac::uart::regs::Uarticr(status));
    }
}
