//! Interrupt service routines for the two serial channels
//!
//! Each routine is the body of one UART interrupt:
//!
//! ```text
//!   IDLE ──irq──▶ read + clear status ──▶ drain FIFO ──empty──▶ IDLE
//! ```
//!
//! Status is cleared unconditionally, before draining, so a byte that lands
//! while draining raises a fresh interrupt instead of being lost. Draining
//! never waits for more input: as soon as the FIFO reports empty the routine
//! returns.

use dfbridge_hal::{UartIrq, UartRx, UartTx};

use crate::dispatch::Dispatcher;
use crate::transcoder::RxBurst;

/// Clears the console and prompts for input
pub const BANNER: &str = "\x1b[2JEnter text: \r\n";

/// Output failure while servicing a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BridgeError<C, P> {
    /// Writing to the console failed
    Console(C),
    /// Writing to the module failed
    Peripheral(P),
}

/// Result of one interrupt invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BurstReport {
    /// Interrupt status read (and cleared) on entry
    pub status: u32,
    /// Bytes drained from the receive FIFO
    pub bytes: usize,
}

/// Write the startup banner to the console
///
/// Returns once the banner has left the transmitter, so receive interrupts
/// enabled afterwards never interleave with it.
pub fn write_banner<C: UartTx>(console: &mut C) -> Result<(), C::Error> {
    console.write_str_blocking(BANNER)?;
    console.flush()
}

/// Service a console interrupt
///
/// Every drained byte is dispatched as an operator command.
pub fn service_console<C, P>(
    console: &mut C,
    peripheral: &mut P,
    dispatcher: &Dispatcher,
) -> Result<BurstReport, BridgeError<C::Error, P::Error>>
where
    C: UartTx + UartRx + UartIrq,
    P: UartTx,
{
    let status = console.interrupt_status();
    console.clear_interrupts(status);

    let mut report = BurstReport { status, bytes: 0 };
    while let Some(byte) = console.try_read_byte() {
        dispatcher.execute(byte, console, peripheral)?;
        report.bytes += 1;
    }

    Ok(report)
}

/// Service a module interrupt
///
/// Every drained byte is echoed to the console as hex.
pub fn service_peripheral<P, C>(peripheral: &mut P, console: &mut C) -> Result<BurstReport, C::Error>
where
    P: UartRx + UartIrq,
    C: UartTx,
{
    let status = peripheral.interrupt_status();
    peripheral.clear_interrupts(status);

    let mut burst = RxBurst::new();
    while let Some(byte) = peripheral.try_read_byte() {
        burst.push(byte, console)?;
    }

    Ok(BurstReport {
        status,
        bytes: burst.len(),
    })
}
