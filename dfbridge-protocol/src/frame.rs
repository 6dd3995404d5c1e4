//! Frame encoding for the DFPlayer command protocol.
//!
//! Frame format:
//! - START (1 byte): 0x7E
//! - VERSION (1 byte): 0xFF
//! - LENGTH (1 byte): 0x06, number of bytes from VERSION through PARAM2
//! - COMMAND (1 byte): command identifier
//! - FEEDBACK (1 byte): 0x01 to request an acknowledgement, 0x00 otherwise
//! - PARAM (2 bytes): big-endian parameter
//! - CHECKSUM (2 bytes, optional): two's-complement of the sum of VERSION..PARAM
//! - END (1 byte): 0xEF

/// Frame start byte
pub const FRAME_START: u8 = 0x7E;

/// Frame end byte
pub const FRAME_END: u8 = 0xEF;

/// Protocol version byte
pub const VERSION: u8 = 0xFF;

/// Length field, counts VERSION through PARAM2
pub const LENGTH: u8 = 0x06;

/// Frame size without checksum
pub const SHORT_FRAME_SIZE: usize = 8;

/// Frame size with checksum
pub const MAX_FRAME_SIZE: usize = 10;

/// Compute the frame checksum over the VERSION..PARAM2 bytes
///
/// The module expects the 16-bit sum of those six bytes plus the checksum to
/// wrap to zero.
pub fn checksum(body: &[u8]) -> u16 {
    let sum = body
        .iter()
        .fold(0u16, |acc, &byte| acc.wrapping_add(byte as u16));
    0u16.wrapping_sub(sum)
}

/// A DFPlayer command frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    /// Command identifier
    pub command: u8,
    /// Request an acknowledgement frame from the module
    ///
    /// The bridge never reads the acknowledgement; it shows up in the hex echo.
    pub feedback: bool,
    /// Command parameter (PARAM1 is the high byte)
    pub param: u16,
}

impl Frame {
    /// Create a new frame
    pub const fn new(command: u8, feedback: bool, param: u16) -> Self {
        Self {
            command,
            feedback,
            param,
        }
    }

    /// The six bytes covered by LENGTH and the checksum
    pub fn body(&self) -> [u8; 6] {
        let [hi, lo] = self.param.to_be_bytes();
        [VERSION, LENGTH, self.command, self.feedback as u8, hi, lo]
    }

    /// The full frame including the checksum field
    pub fn to_bytes(&self) -> [u8; MAX_FRAME_SIZE] {
        let body = self.body();
        let [ck_hi, ck_lo] = checksum(&body).to_be_bytes();

        let mut bytes = [0u8; MAX_FRAME_SIZE];
        bytes[0] = FRAME_START;
        bytes[1..7].copy_from_slice(&body);
        bytes[7] = ck_hi;
        bytes[8] = ck_lo;
        bytes[9] = FRAME_END;
        bytes
    }

    /// The frame without the checksum field
    ///
    /// The module accepts this shorter form.
    pub fn to_short_bytes(&self) -> [u8; SHORT_FRAME_SIZE] {
        let mut bytes = [0u8; SHORT_FRAME_SIZE];
        bytes[0] = FRAME_START;
        bytes[1..7].copy_from_slice(&self.body());
        bytes[7] = FRAME_END;
        bytes
    }
}
