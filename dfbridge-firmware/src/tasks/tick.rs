//! Button tick task
//!
//! Samples the buttons at a fixed rate and wakes the LED task after each
//! sample.

use defmt::*;
use embassy_time::{Duration, Ticker};

use dfbridge_core::buttons::sample_buttons;
use dfbridge_hal_rp2040::gpio::GpioButtons;

use crate::channels::{BUTTONS_SAMPLED, BUTTON_STATE};
use crate::config::BRIDGE_CONFIG;

/// Tick task - samples the buttons every period
#[embassy_executor::task]
pub async fn button_tick_task(mut buttons: GpioButtons<'static>) {
    let period_ms = BRIDGE_CONFIG.button_poll_period_ms();
    info!("Button tick started ({} ms)", period_ms);

    let mut ticker = Ticker::every(Duration::from_millis(period_ms));
    let mut last = sample_buttons(&mut buttons, &BUTTON_STATE);

    loop {
        ticker.next().await;

        let mask = sample_buttons(&mut buttons, &BUTTON_STATE);
        if mask != last {
            debug!("Buttons: {:#04x}", mask.bits());
            last = mask;
        }

        BUTTONS_SAMPLED.signal(());
    }
}
