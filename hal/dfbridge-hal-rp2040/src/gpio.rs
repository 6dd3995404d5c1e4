//! LED and push-button pins

use dfbridge_hal::{ButtonMask, ButtonPad, InputPin, OutputPin};
use embassy_rp::gpio::{Input, Output};

/// Push-pull LED output
pub struct Led<'d> {
    pin: Output<'d>,
}

impl<'d> Led<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl OutputPin for Led<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Button wired to ground with a pull-up, pressed when low
pub struct ActiveLowButton<'d> {
    pin: Input<'d>,
}

impl<'d> ActiveLowButton<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }

    /// Whether the button is held down
    pub fn is_pressed(&self) -> bool {
        self.is_low()
    }
}

impl InputPin for ActiveLowButton<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// The board's left and right buttons
pub struct GpioButtons<'d> {
    left: ActiveLowButton<'d>,
    right: ActiveLowButton<'d>,
}

impl<'d> GpioButtons<'d> {
    pub fn new(left: ActiveLowButton<'d>, right: ActiveLowButton<'d>) -> Self {
        Self { left, right }
    }
}

impl ButtonPad for GpioButtons<'_> {
    fn poll(&mut self) -> ButtonMask {
        ButtonMask::from_pressed(self.left.is_pressed(), self.right.is_pressed())
    }
}
