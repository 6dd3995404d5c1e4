//! DFPlayer serial bridge firmware
//!
//! Lets an operator drive a DFPlayer MP3 module from a serial terminal.
//! Single characters typed on the console are turned into module command
//! frames, and every byte the module sends back is echoed to the console
//! as hex. Two buttons switch the on-board LED.
//!
//! Both serial channels run from their UART interrupts; the executor only
//! hosts the button tasks and a heartbeat.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::uart::Uart;
use embassy_time::Timer;
use portable_atomic::Ordering;
use {defmt_rtt as _, panic_probe as _};

use dfbridge_core::write_banner;
use dfbridge_hal_rp2040::gpio::{ActiveLowButton, GpioButtons, Led};
use dfbridge_hal_rp2040::uart::{embassy_config, RawUart};

use crate::config::BRIDGE_CONFIG;

mod channels;
mod config;
mod irq;
mod tasks;

/// Heartbeat log interval
const HEARTBEAT_SECS: u64 = 60;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("dfbridge firmware starting...");

    let p = embassy_rp::init(Default::default());
    config::check_pin_map();

    // Embassy sets up clocks, pins and baud rates; the interrupt handlers
    // drive the registers afterwards. Both drivers stay alive in this frame.
    let _console = Uart::new_blocking(
        p.UART0,
        p.PIN_0,
        p.PIN_1,
        embassy_config(&BRIDGE_CONFIG.console),
    );
    let _module = Uart::new_blocking(
        p.UART1,
        p.PIN_4,
        p.PIN_5,
        embassy_config(&BRIDGE_CONFIG.peripheral),
    );
    info!(
        "UARTs initialized: console {} baud, module {} baud, {:?} frames",
        BRIDGE_CONFIG.console.baudrate,
        BRIDGE_CONFIG.peripheral.baudrate,
        BRIDGE_CONFIG.frame_format
    );

    let led = Led::new(Output::new(p.PIN_25, Level::Low));
    let buttons = GpioButtons::new(
        ActiveLowButton::new(Input::new(p.PIN_14, Pull::Up)),
        ActiveLowButton::new(Input::new(p.PIN_15, Pull::Up)),
    );

    // Banner goes out before any receive interrupt can fire
    let mut console = RawUart::uart0();
    match write_banner(&mut console) {
        Ok(()) => {}
        Err(e) => match e {},
    }

    irq::enable();

    spawner.spawn(tasks::button_tick_task(buttons)).unwrap();
    spawner.spawn(tasks::button_led_task(led)).unwrap();

    info!("All tasks spawned, bridge running");

    loop {
        Timer::after_secs(HEARTBEAT_SECS).await;
        debug!(
            "heartbeat: {} console bytes, {} module bytes",
            irq::CONSOLE_BYTES.load(Ordering::Relaxed),
            irq::MODULE_BYTES.load(Ordering::Relaxed)
        );
    }
}
