//! Button sampling and LED control
//!
//! The periodic tick samples the buttons into a [`ButtonState`]; the button
//! handler reads it back and drives the LED. The tick is the only writer and
//! the handler the only reader.

use dfbridge_hal::{ButtonMask, ButtonPad, OutputPin};
use portable_atomic::{AtomicU8, Ordering};

/// Button tick rate
pub const BUTTON_POLL_HZ: u32 = 32;

/// Most recently sampled button mask
#[derive(Debug, Default)]
pub struct ButtonState {
    mask: AtomicU8,
}

impl ButtonState {
    /// Create a state with no buttons pressed
    pub const fn new() -> Self {
        Self {
            mask: AtomicU8::new(0),
        }
    }

    /// Publish a new sample
    pub fn store(&self, mask: ButtonMask) {
        self.mask.store(mask.bits(), Ordering::Release);
    }

    /// Read the latest sample
    pub fn load(&self) -> ButtonMask {
        ButtonMask(self.mask.load(Ordering::Acquire))
    }
}

/// Sample the buttons into the shared state (tick side)
pub fn sample_buttons<B: ButtonPad>(pad: &mut B, state: &ButtonState) -> ButtonMask {
    let mask = pad.poll().known();
    state.store(mask);
    mask
}

/// What the LED should do for a button mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedAction {
    On,
    Off,
    /// Leave the LED as it is
    Hold,
}

impl LedAction {
    /// Left alone turns the LED on, right alone turns it off
    pub fn for_mask(mask: ButtonMask) -> Self {
        match mask.known() {
            ButtonMask::LEFT => LedAction::On,
            ButtonMask::RIGHT => LedAction::Off,
            _ => LedAction::Hold,
        }
    }
}

/// Button handler driving one output line
pub struct ButtonLed<P> {
    led: P,
    ticks: u32,
}

impl<P: OutputPin> ButtonLed<P> {
    /// Create a handler for the given LED
    pub fn new(led: P) -> Self {
        Self { led, ticks: 0 }
    }

    /// Apply the latest button sample
    pub fn handle(&mut self, state: &ButtonState) -> LedAction {
        self.ticks = self.ticks.wrapping_add(1);

        let action = LedAction::for_mask(state.load());
        match action {
            LedAction::On => self.led.set_state(true),
            LedAction::Off => self.led.set_state(false),
            LedAction::Hold => {}
        }
        action
    }

    /// Number of samples handled
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Current LED level
    pub fn is_on(&self) -> bool {
        self.led.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeLed {
        high: bool,
        writes: u32,
    }

    impl OutputPin for FakeLed {
        fn set_high(&mut self) {
            self.high = true;
            self.writes += 1;
        }

        fn set_low(&mut self) {
            self.high = false;
            self.writes += 1;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct FakePad(ButtonMask);

    impl ButtonPad for FakePad {
        fn poll(&mut self) -> ButtonMask {
            self.0
        }
    }

    #[test]
    fn test_led_action_mapping() {
        assert_eq!(LedAction::for_mask(ButtonMask::LEFT), LedAction::On);
        assert_eq!(LedAction::for_mask(ButtonMask::RIGHT), LedAction::Off);
        assert_eq!(LedAction::for_mask(ButtonMask::ALL), LedAction::Hold);
        assert_eq!(LedAction::for_mask(ButtonMask::NONE), LedAction::Hold);
    }

    #[test]
    fn test_sample_masks_unknown_bits() {
        let state = ButtonState::new();
        let mut pad = FakePad(ButtonMask(0x30));
        assert_eq!(sample_buttons(&mut pad, &state), ButtonMask::LEFT);
        assert_eq!(state.load(), ButtonMask::LEFT);
    }

    #[test]
    fn test_left_then_right() {
        let state = ButtonState::new();
        let mut handler = ButtonLed::new(FakeLed::default());

        state.store(ButtonMask::LEFT);
        handler.handle(&state);
        assert!(handler.is_on());

        state.store(ButtonMask::NONE);
        assert_eq!(handler.handle(&state), LedAction::Hold);
        assert!(handler.is_on());

        state.store(ButtonMask::RIGHT);
        handler.handle(&state);
        assert!(!handler.is_on());
        assert_eq!(handler.ticks(), 3);
    }

    #[test]
    fn test_both_buttons_leave_led_untouched() {
        let state = ButtonState::new();
        let mut handler = ButtonLed::new(FakeLed::default());

        state.store(ButtonMask::ALL);
        handler.handle(&state);

        assert_eq!(handler.led.writes, 0);
    }
}
