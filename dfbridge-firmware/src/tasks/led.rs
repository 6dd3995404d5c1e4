//! LED task
//!
//! Left button turns the LED on, right button turns it off.

use defmt::*;

use dfbridge_core::{ButtonLed, LedAction};
use dfbridge_hal_rp2040::gpio::Led;

use crate::channels::{BUTTONS_SAMPLED, BUTTON_STATE};

#[embassy_executor::task]
pub async fn button_led_task(led: Led<'static>) {
    info!("LED task started");

    let mut handler = ButtonLed::new(led);
    let mut was_on = handler.is_on();

    loop {
        BUTTONS_SAMPLED.wait().await;

        if handler.handle(&BUTTON_STATE) != LedAction::Hold && handler.is_on() != was_on {
            was_on = handler.is_on();
            debug!("LED {}", if was_on { "on" } else { "off" });
        }
    }
}
