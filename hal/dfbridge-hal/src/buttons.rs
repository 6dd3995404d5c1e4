//! Push-button abstractions
//!
//! Buttons are reported as a bitmask so that combinations (both buttons held)
//! can be matched as a single value. Bit positions follow the launchpad button
//! library: right button on bit 0, left button on bit 4.

/// Bitmask of currently pressed buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(pub u8);

impl ButtonMask {
    /// No buttons pressed
    pub const NONE: Self = Self(0x00);
    /// Right button
    pub const RIGHT: Self = Self(0x01);
    /// Left button
    pub const LEFT: Self = Self(0x10);
    /// Both buttons
    pub const ALL: Self = Self(0x11);

    /// Build a mask from individual button levels
    pub const fn from_pressed(left: bool, right: bool) -> Self {
        let mut bits = 0;
        if left {
            bits |= Self::LEFT.0;
        }
        if right {
            bits |= Self::RIGHT.0;
        }
        Self(bits)
    }

    /// Keep only bits that correspond to a known button
    pub const fn known(self) -> Self {
        Self(self.0 & Self::ALL.0)
    }

    /// Raw bit value
    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// A set of push buttons that can be sampled
pub trait ButtonPad {
    /// Sample the current button state
    fn poll(&mut self) -> ButtonMask;
}
